use std::time::{Duration, Instant};

use futures::future::pending;
use futures_timer::Delay;
use rand::Rng;

pub const DEFAULT_MAX_DELAY: f64 = 10.0;

/// Draws a delay uniformly from `[0, max_delay)`, or `0.0` when `max_delay` is zero.
pub fn sample_delay<R: Rng + ?Sized>(rng: &mut R, max_delay: f64) -> f64 {
    debug_assert!(
        max_delay.is_finite() && max_delay >= 0.0,
        "max_delay must be finite and non-negative, got {}",
        max_delay
    );
    if max_delay > 0.0 {
        rng.gen_range(0.0..max_delay)
    } else {
        0.0
    }
}

/// Sleeps for a random number of seconds in `[0, max_delay)` and returns it.
///
/// `max_delay` must be finite and non-negative.
pub async fn wait_random(max_delay: f64) -> f64 {
    let delay = sample_delay(&mut rand::thread_rng(), max_delay);
    sleep(delay).await;
    delay
}

pub async fn wait_random_with<R: Rng + ?Sized>(rng: &mut R, max_delay: f64) -> f64 {
    let delay = sample_delay(rng, max_delay);
    sleep(delay).await;
    delay
}

async fn sleep(secs: f64) {
    if secs > 0.0 {
        match timer(secs) {
            Some(delay) => delay.await,
            // past the clock's horizon, never wakes
            None => pending::<()>().await,
        }
    }
}

fn timer(secs: f64) -> Option<Delay> {
    let dur = Duration::try_from_secs_f64(secs).ok()?;
    Instant::now().checked_add(dur)?;
    Some(Delay::new(dur))
}
