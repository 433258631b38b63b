use crate::error::ViewerError;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info";

fn build_filter(filter: Option<&str>) -> Result<EnvFilter, ViewerError> {
    if let Ok(env_filter) = EnvFilter::try_from_default_env() {
        return Ok(env_filter);
    }
    let directives = filter.unwrap_or(DEFAULT_LOG_FILTER);
    EnvFilter::try_new(directives)
        .map_err(|e| ViewerError::InvalidParam(format!("invalid log filter '{}': {}", directives, e)))
}

/// 安装全局 fmt 日志订阅器
///
/// 优先使用 RUST_LOG，其次使用传入的过滤串，默认 info。
/// 可重复调用：已安装时返回 Ok(false)。
pub fn init_logging(filter: Option<&str>) -> Result<bool, ViewerError> {
    let env_filter = build_filter(filter)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("logging initialised");
    }
    Ok(installed)
}
