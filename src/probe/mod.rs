// src/probe/mod.rs
mod aggregator;
mod spec;
mod status;

pub use aggregator::{Aggregator, DEFAULT_TIMEOUT_MS};
pub use spec::ProbeSpec;
pub use status::{classify, Status};
