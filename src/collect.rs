use futures::future::join_all;
use futures::task::{Spawn, SpawnExt};

use crate::error::Result;
use crate::random::wait_random;

/// Runs `n` delays concurrently and returns them sorted ascending.
pub async fn wait_n(n: usize, max_delay: f64) -> Vec<f64> {
    let delays = join_all((0..n).map(|_| wait_random(max_delay))).await;
    sorted(delays)
}

/// Like [`wait_n`] but each delay is its own task on `spawner`.
pub async fn spawn_wait_n<S>(spawner: &S, n: usize, max_delay: f64) -> Result<Vec<f64>>
where
    S: Spawn + ?Sized,
{
    let mut handles = Vec::with_capacity(n);
    for _ in 0..n {
        handles.push(spawner.spawn_with_handle(wait_random(max_delay))?);
    }
    let delays = join_all(handles).await;
    Ok(sorted(delays))
}

fn sorted(mut delays: Vec<f64>) -> Vec<f64> {
    delays.sort_unstable_by(f64::total_cmp);
    delays
}
