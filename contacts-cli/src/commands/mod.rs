//! Command implementations for the contacts CLI

pub mod serve;

pub use serve::run_serve;
