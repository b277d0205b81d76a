pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod utils;
