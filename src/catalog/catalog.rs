use crate::error::{CatalogError, ViewerError};
use crate::types::Module;
use std::fs;
use std::path::Path;
use tracing::debug;

/// 有序的课程章节目录
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    modules: Vec<Module>,
}

impl Catalog {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    /// 解析章节数组 JSON
    pub fn from_json(raw: &str) -> Result<Self, ViewerError> {
        let modules: Vec<Module> =
            serde_json::from_str(raw).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Ok(Self::new(modules))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ViewerError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let catalog = Self::from_json(&raw)?;
        debug!(path = %path.display(), modules = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn position(&self, module_id: &str) -> Option<usize> {
        self.modules.iter().position(|m| m.id == module_id)
    }

    pub fn get(&self, module_id: &str) -> Result<&Module, CatalogError> {
        self.modules
            .iter()
            .find(|m| m.id == module_id)
            .ok_or_else(|| CatalogError::ModuleNotFound(module_id.to_string()))
    }
}
