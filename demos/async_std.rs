use std::time::Instant;
use wait_n::{wait_random, DEFAULT_MAX_DELAY};

#[async_std::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let delay = wait_random(DEFAULT_MAX_DELAY / 10.0).await;

    println!("Slept {:.3}s", delay);
    println!("Took {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}
