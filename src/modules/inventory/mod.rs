pub mod models;
pub mod packages;
pub mod startup;
pub mod tasks;

pub use packages::list_installed_packages;
pub use startup::list_startup_entries;
pub use tasks::list_scheduled_tasks;
