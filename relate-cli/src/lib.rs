use std::sync::LazyLock;
use std::time::Instant;

pub mod cli;
pub mod eval;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
