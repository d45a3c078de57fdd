// src/lib.rs
pub mod config;
pub mod probe;
pub mod report;
pub mod transport;
