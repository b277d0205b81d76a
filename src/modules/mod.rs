pub mod classifier;
pub mod common;
pub mod executor;
pub mod inventory;
pub mod maintenance;
pub mod matcher;
pub mod pipeline;
pub mod planner;
pub mod system;
pub mod tables;
