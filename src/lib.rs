pub mod commands;
pub mod modules;

pub use modules::common::config::AppConfig;
pub use modules::common::error::TuneError;
pub use modules::common::utils;
pub use modules::classifier;
pub use modules::executor;
pub use modules::matcher;
pub use modules::pipeline;
pub use modules::planner;
