use futures::task::SpawnError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to spawn delay task: {0}")]
    Spawn(#[from] SpawnError),
}

pub type Result<T> = std::result::Result<T, Error>;
