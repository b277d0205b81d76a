//! 面向用户的维护操作: 启动项清理、预装应用移除、一键优化

pub mod packages;
pub mod startup;
pub mod steps;

#[cfg(test)]
pub(crate) mod fake;

pub use packages::{remove_bloatware, BloatwareReport};
pub use startup::{clean_startup, CleanOptions, StartupReport};
pub use steps::build_maintenance_pipeline;
