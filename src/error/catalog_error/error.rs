use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Failed to read '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to write '{path}': {message}")]
    Write { path: String, message: String },

    /// 课程内容或进度文件结构不合法
    #[error("Malformed content: {0}")]
    Malformed(String),

    #[error("Module '{0}' not found in catalog")]
    ModuleNotFound(String),
}
