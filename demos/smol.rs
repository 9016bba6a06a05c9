use futures::task::{FutureObj, Spawn, SpawnError};
use std::time::Instant;
use wait_n::spawn_wait_n;

struct SmolSpawner;

impl Spawn for SmolSpawner {
    fn spawn_obj(&self, future: FutureObj<'static, ()>) -> Result<(), SpawnError> {
        smol::spawn(future).detach();
        Ok(())
    }
}

#[smol_potat::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let delays = spawn_wait_n(&SmolSpawner, 10, 2.0).await?;

    println!("{:?}", delays);
    println!("Took {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}
