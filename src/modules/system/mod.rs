//! 与操作系统交互的部分
//!
//! 维护流程只通过 [`Host`] 访问系统，测试中可以替换为内存实现。

pub mod cleanup;
pub mod packages;
pub mod registry;
pub mod services;
pub mod shell;
pub mod tasks;

use crate::modules::common::error::TuneError;
use crate::modules::inventory::{self, models::InventoryItem, models::ScheduledTask};
use crate::modules::tables::RegistryTweak;

/// 系统操作接口
pub trait Host {
    fn startup_entries(&self) -> Result<Vec<InventoryItem>, TuneError>;
    fn installed_packages(&self) -> Result<Vec<InventoryItem>, TuneError>;
    fn scheduled_tasks(&self) -> Result<Vec<ScheduledTask>, TuneError>;

    fn remove_startup_entry(&self, item: &InventoryItem) -> Result<(), TuneError>;
    fn remove_package(&self, item: &InventoryItem) -> Result<(), TuneError>;
    fn disable_task(&self, task: &ScheduledTask) -> Result<(), TuneError>;

    fn create_restore_point(&self, description: &str) -> Result<(), TuneError>;
    fn set_service_manual(&self, name: &str) -> Result<(), TuneError>;
    fn apply_registry_tweak(&self, tweak: &RegistryTweak) -> Result<(), TuneError>;
    fn flush_dns(&self) -> Result<(), TuneError>;
    fn reboot(&self) -> Result<(), TuneError>;
}

/// 真实的 Windows 实现
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsHost;

impl Host for WindowsHost {
    fn startup_entries(&self) -> Result<Vec<InventoryItem>, TuneError> {
        inventory::list_startup_entries()
    }

    fn installed_packages(&self) -> Result<Vec<InventoryItem>, TuneError> {
        inventory::list_installed_packages()
    }

    fn scheduled_tasks(&self) -> Result<Vec<ScheduledTask>, TuneError> {
        inventory::list_scheduled_tasks()
    }

    fn remove_startup_entry(&self, item: &InventoryItem) -> Result<(), TuneError> {
        registry::remove_startup_entry(item)
    }

    fn remove_package(&self, item: &InventoryItem) -> Result<(), TuneError> {
        packages::remove_package(item)
    }

    fn disable_task(&self, task: &ScheduledTask) -> Result<(), TuneError> {
        tasks::disable_task(task)
    }

    fn create_restore_point(&self, description: &str) -> Result<(), TuneError> {
        shell::run_powershell(&format!(
            "Checkpoint-Computer -Description {} -RestorePointType MODIFY_SETTINGS -ErrorAction Stop",
            shell::quote_ps(description)
        ))?;
        Ok(())
    }

    fn set_service_manual(&self, name: &str) -> Result<(), TuneError> {
        services::set_service_manual(name)
    }

    fn apply_registry_tweak(&self, tweak: &RegistryTweak) -> Result<(), TuneError> {
        registry::apply_tweak(tweak)
    }

    fn flush_dns(&self) -> Result<(), TuneError> {
        shell::run_command("ipconfig", &["/flushdns"])?;
        Ok(())
    }

    fn reboot(&self) -> Result<(), TuneError> {
        shell::run_command("shutdown", &["/r", "/t", "10"])?;
        Ok(())
    }
}

/// 当前进程是否以管理员身份运行
#[cfg(windows)]
pub fn is_elevated() -> bool {
    // SAFETY: 无参数，只查询当前进程令牌
    unsafe { windows::Win32::UI::Shell::IsUserAnAdmin().as_bool() }
}

#[cfg(not(windows))]
pub fn is_elevated() -> bool {
    false
}
