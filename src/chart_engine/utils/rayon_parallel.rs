use crate::error::ViewerError;

/// 在单线程 rayon 池中执行闭包
///
/// 批量生成时外层已经按组合并行，内部 polars 计算固定为单线程，避免线程过度订阅。
pub fn process_in_single_thread<F, R>(f: F) -> Result<R, ViewerError>
where
    F: FnOnce() -> Result<R, ViewerError> + Send,
    R: Send,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .map_err(|e| {
            ViewerError::InfrastructureError(format!("Failed to build thread pool: {}", e))
        })?;

    pool.install(f)
}
