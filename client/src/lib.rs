#[macro_use]
mod logger;

pub mod cli;
pub mod runner;
pub mod scenario;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
