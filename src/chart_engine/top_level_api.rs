use crate::catalog::{Catalog, CompletionState, ProgressStore};
use crate::chart_engine::generators::generate_with_rng;
use crate::chart_engine::plan::plan_for;
use crate::chart_engine::renderer::render;
use crate::chart_engine::utils::process_in_single_thread;
use crate::error::ViewerError;
use crate::types::{
    ChapterState, ConceptChart, GenerateConfig, IndicatorKind, RenderConfig, RenderedChart,
    Scenario, SidebarView, ViewerConfig,
};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};
#[cfg(feature = "python")]
use crate::chart_engine::plan;
#[cfg(feature = "python")]
use crate::types::{ChartPlan, ScenarioCategory};
#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3_stub_gen::derive::*;

/// 生成一条样本序列（RNG 由配置决定）
pub fn generate_samples(
    kind: IndicatorKind,
    scenario: Scenario,
    config: &GenerateConfig,
) -> Result<ConceptChart, ViewerError> {
    let mut rng = config.make_rng();
    generate_with_rng(kind, scenario, config.length.unwrap_or(0), &mut rng)
}

/// 生成 + 选方案 + 渲染
pub fn build_chart(
    kind: IndicatorKind,
    scenario: Scenario,
    generate: &GenerateConfig,
    render_config: &RenderConfig,
) -> Result<RenderedChart, ViewerError> {
    let chart = generate_samples(kind, scenario, generate)?;
    render(&chart, &plan_for(kind), render_config)
}

/// 全部 (指标, 场景) 组合，顺序固定
pub fn gallery_pairs() -> Vec<(IndicatorKind, Scenario)> {
    IndicatorKind::ALL
        .iter()
        .flat_map(|kind| Scenario::ALL.iter().map(move |scenario| (*kind, *scenario)))
        .collect()
}

/// 渲染全部组合
///
/// 按组合并行，每个任务内部 polars 固定单线程；
/// 第 i 个组合使用 generate.derive(i)，固定种子时结果可复现且与线程调度无关。
pub fn build_gallery(
    generate: &GenerateConfig,
    render_config: &RenderConfig,
) -> Result<Vec<RenderedChart>, ViewerError> {
    let start = Instant::now();
    let pairs = gallery_pairs();

    let charts = pairs
        .par_iter()
        .enumerate()
        .map(|(index, (kind, scenario))| {
            process_in_single_thread(|| {
                build_chart(*kind, *scenario, &generate.derive(index), render_config)
            })
        })
        .collect::<Result<Vec<_>, ViewerError>>()?;

    info!(
        charts = charts.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "gallery built"
    );
    Ok(charts)
}

/// 读取目录与进度，组装当前章节和侧边栏
pub fn render_chapter(
    config: &ViewerConfig,
    active_id: Option<&str>,
) -> Result<(ChapterState, SidebarView), ViewerError> {
    let catalog = Catalog::load(&config.catalog_path)?;
    let progress = CompletionState::load(&config.progress_path)?;
    let chapter = catalog.chapter(active_id, &progress, &config.generate, &config.render)?;
    let sidebar = catalog.sidebar(active_id, &progress);
    debug!(active_id, loading = chapter.is_loading(), "chapter rendered");
    Ok((chapter, sidebar))
}

/// 切换章节完成状态并立即写回进度文件，返回切换后的状态
pub fn toggle_completion(config: &ViewerConfig, module_id: &str) -> Result<bool, ViewerError> {
    let mut store = ProgressStore::open(&config.progress_path)?;
    store.toggle(module_id)
}

/// PyO3 接口：生成样本
#[cfg(feature = "python")]
#[gen_stub_pyfunction]
#[pyfunction(name = "generate_samples")]
#[pyo3(signature = (kind, scenario=Scenario::Bullish, config=None))]
pub fn py_generate_samples(
    kind: IndicatorKind,
    scenario: Scenario,
    config: Option<GenerateConfig>,
) -> PyResult<ConceptChart> {
    Ok(generate_samples(kind, scenario, &config.unwrap_or_default())?)
}

/// PyO3 接口：按指标名取绘图方案，无法识别时返回占位方案
#[cfg(feature = "python")]
#[gen_stub_pyfunction]
#[pyfunction(name = "plan_for")]
pub fn py_plan_for(kind: &str) -> ChartPlan {
    plan::plan_for_key(kind)
}

#[cfg(feature = "python")]
#[gen_stub_pyfunction]
#[pyfunction(name = "scenario_label")]
pub fn py_scenario_label(scenario: &str) -> String {
    plan::label_for_key(scenario)
}

#[cfg(feature = "python")]
#[gen_stub_pyfunction]
#[pyfunction(name = "scenario_category")]
pub fn py_scenario_category(scenario: &str) -> ScenarioCategory {
    plan::category_for_key(scenario)
}

/// PyO3 接口：渲染单张图表
#[cfg(feature = "python")]
#[gen_stub_pyfunction]
#[pyfunction(name = "render_chart")]
#[pyo3(signature = (kind, scenario=Scenario::Bullish, generate=None, render=None))]
pub fn py_render_chart(
    kind: IndicatorKind,
    scenario: Scenario,
    generate: Option<GenerateConfig>,
    render: Option<RenderConfig>,
) -> PyResult<RenderedChart> {
    Ok(build_chart(
        kind,
        scenario,
        &generate.unwrap_or_default(),
        &render.unwrap_or_default(),
    )?)
}

/// PyO3 接口：渲染全部组合（释放 GIL）
#[cfg(feature = "python")]
#[gen_stub_pyfunction]
#[pyfunction(name = "build_gallery")]
#[pyo3(signature = (generate=None, render=None))]
pub fn py_build_gallery(
    py: Python<'_>,
    generate: Option<GenerateConfig>,
    render: Option<RenderConfig>,
) -> PyResult<Vec<RenderedChart>> {
    let generate = generate.unwrap_or_default();
    let render = render.unwrap_or_default();
    Ok(py.allow_threads(|| build_gallery(&generate, &render))?)
}

#[cfg(feature = "python")]
#[gen_stub_pyfunction]
#[pyfunction(name = "render_chapter")]
#[pyo3(signature = (config, active_id=None))]
pub fn py_render_chapter(
    config: ViewerConfig,
    active_id: Option<String>,
) -> PyResult<(ChapterState, SidebarView)> {
    Ok(render_chapter(&config, active_id.as_deref())?)
}

#[cfg(feature = "python")]
#[gen_stub_pyfunction]
#[pyfunction(name = "toggle_completion")]
pub fn py_toggle_completion(config: ViewerConfig, module_id: &str) -> PyResult<bool> {
    Ok(toggle_completion(&config, module_id)?)
}

#[cfg(feature = "python")]
#[gen_stub_pyfunction]
#[pyfunction(name = "init_logging")]
#[pyo3(signature = (filter=None))]
pub fn py_init_logging(filter: Option<&str>) -> PyResult<bool> {
    Ok(crate::logging::init_logging(filter)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_engine::utils::test_helpers::{SAMPLE_CATALOG, TEST_SEED};
    use tempfile::tempdir;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = GenerateConfig::seeded(TEST_SEED);
        let a = generate_samples(IndicatorKind::Vol, Scenario::BreakoutUp, &config).unwrap();
        let b = generate_samples(IndicatorKind::Vol, Scenario::BreakoutUp, &config).unwrap();
        assert!(a.samples().equals_missing(b.samples()));

        let short = generate_samples(
            IndicatorKind::Kdj,
            Scenario::Overbought,
            &GenerateConfig::new(Some(TEST_SEED), Some(20)),
        )
        .unwrap();
        assert_eq!(short.len(), 20);
    }

    #[test]
    fn test_gallery_covers_every_pair_and_is_reproducible() {
        let generate = GenerateConfig::seeded(TEST_SEED);
        let render_config = RenderConfig::new(320, 120);
        let first = build_gallery(&generate, &render_config).unwrap();
        assert_eq!(first.len(), IndicatorKind::ALL.len() * Scenario::ALL.len());
        assert_eq!(first[0].header.title, "MA • 多头趋势 / 金叉");

        let second = build_gallery(&generate, &render_config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_chapter_and_progress_round_trip() {
        let dir = tempdir().unwrap();
        let catalog_path = dir.path().join("modules.json");
        std::fs::write(&catalog_path, SAMPLE_CATALOG).unwrap();
        let config = ViewerConfig::new(
            catalog_path.display().to_string(),
            dir.path().join("completed_modules.json").display().to_string(),
            GenerateConfig::seeded(TEST_SEED),
            RenderConfig::default(),
        );

        let (chapter, sidebar) = render_chapter(&config, Some("discipline")).unwrap();
        assert!(!chapter.chapter().unwrap().completed);
        assert_eq!(sidebar.completed_count, 0);

        assert!(toggle_completion(&config, "discipline").unwrap());
        let (chapter, sidebar) = render_chapter(&config, Some("discipline")).unwrap();
        assert!(chapter.chapter().unwrap().course_finished);
        assert_eq!(sidebar.progress_percent, 33);

        assert!(!toggle_completion(&config, "discipline").unwrap());
    }
}
