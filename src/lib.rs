pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod loader;
