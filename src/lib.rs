#![forbid(unsafe_code)]

mod collect;
pub mod error;
mod random;

pub use collect::{spawn_wait_n, wait_n};
pub use error::{Error, Result};
pub use random::{sample_delay, wait_random, wait_random_with, DEFAULT_MAX_DELAY};
