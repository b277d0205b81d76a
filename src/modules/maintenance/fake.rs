//! 测试用的内存 Host

use std::cell::{Cell, RefCell};

use crate::modules::common::error::TuneError;
use crate::modules::inventory::models::{Hive, InventoryItem, ScheduledTask, SourceLocation};
use crate::modules::system::Host;
use crate::modules::tables::RegistryTweak;

#[derive(Default)]
pub struct FakeHost {
    startup: Vec<InventoryItem>,
    packages: Vec<InventoryItem>,
    tasks: RefCell<Vec<ScheduledTask>>,
    fail_ids: RefCell<Vec<String>>,
    fail_inventory: Cell<bool>,
    fail_task_listing: Cell<bool>,
    fail_restore_point: Cell<bool>,
    removed: RefCell<Vec<String>>,
    disabled: RefCell<Vec<String>>,
    services: RefCell<Vec<String>>,
    tweaks: RefCell<Vec<String>>,
    dns_flushed: Cell<bool>,
}

impl FakeHost {
    pub fn with_startup(ids: &[&str]) -> Self {
        Self {
            startup: ids
                .iter()
                .map(|id| {
                    InventoryItem::new(
                        *id,
                        format!("{}.exe", id),
                        SourceLocation::RegistryValue {
                            hive: Hive::CurrentUser,
                            key: r"Software\Microsoft\Windows\CurrentVersion\Run".to_string(),
                            value: id.to_string(),
                        },
                    )
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_packages(names: &[&str]) -> Self {
        Self {
            packages: names
                .iter()
                .map(|name| {
                    InventoryItem::new(
                        *name,
                        "1.0.0.0",
                        SourceLocation::AppxPackage {
                            full_name: format!("{}_1.0.0.0_x64__8wekyb3d8bbwe", name),
                        },
                    )
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn set_tasks(&self, paths: &[&str]) {
        *self.tasks.borrow_mut() = paths
            .iter()
            .map(|p| ScheduledTask::from_path(*p, "Ready"))
            .collect();
    }

    /// 名称等于 `id` 的项、服务或调整项操作失败
    pub fn fail_on(&self, id: &str) {
        self.fail_ids.borrow_mut().push(id.to_string());
    }

    pub fn fail_inventory(&self) {
        self.fail_inventory.set(true);
    }

    pub fn fail_task_listing(&self) {
        self.fail_task_listing.set(true);
    }

    pub fn fail_restore_point(&self) {
        self.fail_restore_point.set(true);
    }

    pub fn removed(&self) -> Vec<String> {
        self.removed.borrow().clone()
    }

    pub fn disabled(&self) -> Vec<String> {
        self.disabled.borrow().clone()
    }

    pub fn services(&self) -> Vec<String> {
        self.services.borrow().clone()
    }

    pub fn tweaks(&self) -> Vec<String> {
        self.tweaks.borrow().clone()
    }

    pub fn dns_flushed(&self) -> bool {
        self.dns_flushed.get()
    }

    fn check(&self, id: &str) -> Result<(), TuneError> {
        if self.fail_ids.borrow().iter().any(|f| f == id) {
            return Err(TuneError::PermissionDenied(format!("Access is denied: {}", id)));
        }
        Ok(())
    }
}

impl Host for FakeHost {
    fn startup_entries(&self) -> Result<Vec<InventoryItem>, TuneError> {
        if self.fail_inventory.get() {
            return Err(TuneError::Registry("无法读取 Run 键".to_string()));
        }
        Ok(self.startup.clone())
    }

    fn installed_packages(&self) -> Result<Vec<InventoryItem>, TuneError> {
        if self.fail_inventory.get() {
            return Err(TuneError::Package("Get-AppxPackage 失败".to_string()));
        }
        Ok(self.packages.clone())
    }

    fn scheduled_tasks(&self) -> Result<Vec<ScheduledTask>, TuneError> {
        if self.fail_task_listing.get() {
            return Err(TuneError::ScheduledTask("schtasks 失败".to_string()));
        }
        Ok(self.tasks.borrow().clone())
    }

    fn remove_startup_entry(&self, item: &InventoryItem) -> Result<(), TuneError> {
        self.check(&item.id)?;
        self.removed.borrow_mut().push(item.id.clone());
        Ok(())
    }

    fn remove_package(&self, item: &InventoryItem) -> Result<(), TuneError> {
        self.check(&item.id)?;
        self.removed.borrow_mut().push(item.id.clone());
        Ok(())
    }

    fn disable_task(&self, task: &ScheduledTask) -> Result<(), TuneError> {
        self.check(&task.name)?;
        self.disabled.borrow_mut().push(task.path.clone());
        Ok(())
    }

    fn create_restore_point(&self, _description: &str) -> Result<(), TuneError> {
        if self.fail_restore_point.get() {
            return Err(TuneError::Command("系统还原已被禁用".to_string()));
        }
        Ok(())
    }

    fn set_service_manual(&self, name: &str) -> Result<(), TuneError> {
        self.check(name)?;
        self.services.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn apply_registry_tweak(&self, tweak: &RegistryTweak) -> Result<(), TuneError> {
        self.check(&tweak.name)?;
        self.tweaks.borrow_mut().push(tweak.name.clone());
        Ok(())
    }

    fn flush_dns(&self) -> Result<(), TuneError> {
        self.dns_flushed.set(true);
        Ok(())
    }

    fn reboot(&self) -> Result<(), TuneError> {
        Ok(())
    }
}
