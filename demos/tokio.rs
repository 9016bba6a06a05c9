use std::time::Instant;
use wait_n::wait_n;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let delays = wait_n(10, 2.0).await;

    println!("{:?}", delays);
    println!("Took {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}
