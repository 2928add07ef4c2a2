//! Wall-clock timing for a single operation.

use std::future::Future;
use tokio::time::Instant;

/// Awaits `op` and reports how long it took, in milliseconds.
///
/// The start mark is taken immediately before the operation is polled for the
/// first time and the end mark immediately after it resolves, so the duration
/// is non-negative by construction. If the operation fails, the error
/// propagates and no duration is reported.
///
/// Uses `tokio::time::Instant` so that tests running under a paused runtime
/// clock measure exact durations.
pub async fn measure<F, T, E>(op: F) -> Result<(T, f64), E>
where
    F: Future<Output = Result<T, E>>,
{
    let start = Instant::now();
    let out = op.await?;
    let elapsed = start.elapsed();
    Ok((out, elapsed.as_secs_f64() * 1000.0))
}
