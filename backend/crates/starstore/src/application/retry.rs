//! Bounded retry for store writes
//!
//! Only database errors are retried; validation failures never are. The
//! caller passes a closure that re-submits the same already-constructed
//! record, so server-generated ids are reused, never regenerated.

use crate::error::{StoreError, StoreResult};
use std::future::Future;

pub(crate) async fn write_with_retry<F, Fut>(
    retries: u32,
    record: &'static str,
    mut write: F,
) -> StoreResult<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = StoreResult<()>>,
{
    let mut attempt = 0u32;
    loop {
        match write().await {
            Ok(()) => return Ok(()),
            Err(err @ StoreError::Database(_)) if attempt < retries => {
                attempt += 1;
                tracing::warn!(record, attempt, error = %err, "Retrying store write");
            }
            Err(err) => return Err(err),
        }
    }
}
