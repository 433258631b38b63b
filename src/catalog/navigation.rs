use super::catalog::Catalog;
use super::progress::{completion_percent, CompletionState};
use crate::chart_engine::dispatcher::render_section;
use crate::error::ViewerError;
use crate::types::{
    ChapterState, ChapterView, GenerateConfig, Module, NavLink, RenderConfig, SidebarEntry,
    SidebarView,
};
use tracing::warn;

fn nav_link(module: &Module) -> NavLink {
    NavLink {
        module_id: module.id.clone(),
        title: module.title.clone(),
    }
}

impl Catalog {
    /// 解析当前章节下标；未指定或找不到时回到第一章
    pub fn resolve_active(&self, active_id: Option<&str>) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        match active_id {
            None => Some(0),
            Some(id) => Some(self.position(id).unwrap_or_else(|| {
                warn!(module_id = id, "unknown active module, showing first chapter");
                0
            })),
        }
    }

    /// 组装当前章节视图；目录为空时返回 Loading
    ///
    /// 每个小节的图表使用 generate.derive(小节下标) 取种子。
    pub fn chapter(
        &self,
        active_id: Option<&str>,
        progress: &CompletionState,
        generate: &GenerateConfig,
        render: &RenderConfig,
    ) -> Result<ChapterState, ViewerError> {
        let Some(index) = self.resolve_active(active_id) else {
            return Ok(ChapterState::Loading);
        };
        let modules = self.modules();
        let module = &modules[index];

        let sections = module
            .sections
            .iter()
            .enumerate()
            .map(|(i, section)| render_section(section, &generate.derive(i), render))
            .collect::<Result<Vec<_>, ViewerError>>()?;

        let completed = progress.is_completed(&module.id);
        let prev = index.checked_sub(1).map(|i| nav_link(&modules[i]));
        let next = modules.get(index + 1).map(nav_link);
        let course_finished = next.is_none() && completed;

        Ok(ChapterState::Ready(Box::new(ChapterView {
            index,
            module_id: module.id.clone(),
            title: module.title.clone(),
            subtitle: module.subtitle.clone(),
            description: module.description.clone(),
            completed,
            sections,
            prev,
            next,
            course_finished,
        })))
    }

    /// 侧边栏：章节列表与整体进度（只统计目录内的章节）
    pub fn sidebar(&self, active_id: Option<&str>, progress: &CompletionState) -> SidebarView {
        let active = self.resolve_active(active_id);
        let entries = self
            .modules()
            .iter()
            .enumerate()
            .map(|(i, module)| SidebarEntry {
                module_id: module.id.clone(),
                title: module.title.clone(),
                active: active == Some(i),
                completed: progress.is_completed(&module.id),
            })
            .collect::<Vec<_>>();
        let completed_count = entries.iter().filter(|entry| entry.completed).count();

        SidebarView {
            completed_count,
            total: self.len(),
            progress_percent: completion_percent(completed_count, self.len()),
            entries,
        }
    }
}
