use crate::error::{CatalogError, ViewerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn completion_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = (completed as f64 / total as f64 * 100.0).round() as u32;
    percent.min(100)
}

/// 已完成章节集合，保持标记顺序
///
/// 持久化格式为扁平的 JSON 字符串数组。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionState {
    completed: Vec<String>,
}

impl CompletionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::new();
        for id in ids {
            let id = id.into();
            if !state.is_completed(&id) {
                state.completed.push(id);
            }
        }
        state
    }

    /// 切换完成状态，返回切换后是否为已完成
    pub fn toggle(&mut self, module_id: &str) -> bool {
        if let Some(pos) = self.completed.iter().position(|id| id == module_id) {
            self.completed.remove(pos);
            false
        } else {
            self.completed.push(module_id.to_string());
            true
        }
    }

    pub fn is_completed(&self, module_id: &str) -> bool {
        self.completed.iter().any(|id| id == module_id)
    }

    pub fn count(&self) -> usize {
        self.completed.len()
    }

    pub fn ids(&self) -> &[String] {
        &self.completed
    }

    /// 完成百分比（四舍五入，空目录为 0，上限 100）
    pub fn progress_percent(&self, total: usize) -> u32 {
        completion_percent(self.count(), total)
    }

    /// 读取进度文件；文件不存在时视为尚无进度
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ViewerError> {
        let path = path.as_ref();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => {
                return Err(CatalogError::Read {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
                .into())
            }
        };
        let ids: Vec<String> = serde_json::from_str(&raw).map_err(|e| {
            CatalogError::Malformed(format!("progress file '{}': {}", path.display(), e))
        })?;
        Ok(Self::from_ids(ids))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ViewerError> {
        let path = path.as_ref();
        let raw = serde_json::to_string(&self.completed)?;
        fs::write(path, raw).map_err(|e| CatalogError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

/// 绑定到文件的进度：每次修改后立即写回
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
    state: CompletionState,
}

impl ProgressStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ViewerError> {
        let path = path.into();
        let state = CompletionState::load(&path)?;
        Ok(Self { path, state })
    }

    pub fn state(&self) -> &CompletionState {
        &self.state
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn toggle(&mut self, module_id: &str) -> Result<bool, ViewerError> {
        let completed = self.state.toggle(module_id);
        self.state.save(&self.path)?;
        info!(
            module_id,
            completed,
            total_completed = self.state.count(),
            path = %self.path.display(),
            "progress saved"
        );
        Ok(completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_toggle_keeps_insertion_order() {
        let mut state = CompletionState::new();
        assert!(state.toggle("ma"));
        assert!(state.toggle("macd"));
        assert!(state.toggle("rsi"));
        assert!(!state.toggle("macd"));
        assert_eq!(state.ids(), &["ma".to_string(), "rsi".to_string()]);
        assert!(state.is_completed("rsi"));
        assert!(!state.is_completed("macd"));
    }

    #[test]
    fn test_progress_percent_rounds() {
        let state = CompletionState::from_ids(["a", "b", "a"]);
        assert_eq!(state.count(), 2);
        assert_eq!(state.progress_percent(3), 67);
        assert_eq!(state.progress_percent(0), 0);
        assert_eq!(state.progress_percent(1), 100);
        assert_eq!(CompletionState::new().progress_percent(5), 0);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let state = CompletionState::load(dir.path().join("missing.json")).unwrap();
        assert_eq!(state, CompletionState::new());
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, r#"{"completed": true}"#).unwrap();
        let err = CompletionState::load(&path).unwrap_err();
        assert!(matches!(err, ViewerError::Catalog(CatalogError::Malformed(_))));
    }

    #[test]
    fn test_store_persists_every_toggle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("completed_modules.json");

        let mut store = ProgressStore::open(&path).unwrap();
        assert!(store.toggle("boll").unwrap());
        assert!(store.toggle("kdj").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["boll","kdj"]"#);

        assert!(!store.toggle("boll").unwrap());
        let reopened = ProgressStore::open(&path).unwrap();
        assert_eq!(reopened.state().ids(), &["kdj".to_string()]);
    }
}
