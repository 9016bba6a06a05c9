use futures::task::{FutureObj, Spawn, SpawnError};
use std::time::{Duration, Instant};
use wait_n::{spawn_wait_n, wait_n, wait_random};

fn check(delays: &[f64], n: usize, max_delay: f64) {
    assert_eq!(n, delays.len());
    assert!(delays.iter().all(|d| *d >= 0.0 && *d < max_delay));
    assert!(delays.windows(2).all(|w| w[0] <= w[1]));
}

struct TokioSpawner;

impl Spawn for TokioSpawner {
    fn spawn_obj(&self, future: FutureObj<'static, ()>) -> Result<(), SpawnError> {
        tokio::spawn(future);
        Ok(())
    }
}

#[tokio::test]
async fn tokio_wait_n() {
    let start = Instant::now();
    let delays = wait_n(25, 0.2).await;

    check(&delays, 25, 0.2);
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn tokio_spawn_wait_n() {
    let delays = spawn_wait_n(&TokioSpawner, 25, 0.2).await.unwrap();

    check(&delays, 25, 0.2);
}

#[async_std::test]
async fn async_std_wait_n() {
    let delays = wait_n(10, 0.1).await;

    check(&delays, 10, 0.1);
}

#[async_std::test]
async fn async_std_wait_random() {
    let delay = wait_random(0.1).await;

    assert!(delay >= 0.0 && delay < 0.1);
}

#[test]
fn smol_wait_n() {
    let delays = smol::block_on(wait_n(10, 0.1));

    check(&delays, 10, 0.1);
}

#[test]
fn smol_wait_n_zero() {
    assert!(smol::block_on(wait_n(0, 1.0)).is_empty());
    assert_eq!(vec![0.0; 5], smol::block_on(wait_n(5, 0.0)));
}
