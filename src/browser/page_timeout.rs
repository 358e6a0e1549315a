//! Timeout wrapper for page operations

use std::future::Future;
use std::time::Duration;

use crate::error::{TableScrapeError, TableScrapeResult};

/// Run `operation`, failing with [`TableScrapeError::Timeout`] after `timeout_secs`
///
/// Errors produced by the operation itself are passed through unchanged.
pub async fn with_page_timeout<F, T>(
    operation: F,
    timeout_secs: u64,
    operation_name: &str,
) -> TableScrapeResult<T>
where
    F: Future<Output = TableScrapeResult<T>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), operation).await {
        Ok(result) => result,
        Err(_) => Err(TableScrapeError::Timeout {
            operation: operation_name.to_string(),
            seconds: timeout_secs,
        }),
    }
}
