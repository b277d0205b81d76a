use super::models::{Hive, InventoryItem};
use crate::modules::common::error::TuneError;

/// 登录时自动运行的四个注册表位置
pub const RUN_KEYS: &[(Hive, &str)] = &[
    (Hive::CurrentUser, r"Software\Microsoft\Windows\CurrentVersion\Run"),
    (Hive::CurrentUser, r"Software\Microsoft\Windows\CurrentVersion\RunOnce"),
    (Hive::LocalMachine, r"SOFTWARE\Microsoft\Windows\CurrentVersion\Run"),
    (Hive::LocalMachine, r"SOFTWARE\Microsoft\Windows\CurrentVersion\RunOnce"),
];

/// 从注册表读取启动项
#[cfg(windows)]
pub fn list_startup_entries() -> Result<Vec<InventoryItem>, TuneError> {
    use super::models::SourceLocation;
    use crate::modules::system::registry::predef;

    let mut items = Vec::new();

    for (hive, path) in RUN_KEYS {
        match predef(*hive).open_subkey(path) {
            Ok(key) => {
                for (name, value) in key.enum_values().filter_map(|v| v.ok()) {
                    // 跳过默认值
                    if name.is_empty() {
                        continue;
                    }

                    items.push(InventoryItem::new(
                        name.clone(),
                        value.to_string(),
                        SourceLocation::RegistryValue {
                            hive: *hive,
                            key: path.to_string(),
                            value: name,
                        },
                    ));
                }
            }
            Err(e) => {
                tracing::debug!("无法打开注册表路径 {}\\{}: {}", hive, path, e);
            }
        }
    }

    tracing::debug!("读取到 {} 个启动项", items.len());
    Ok(items)
}

#[cfg(not(windows))]
pub fn list_startup_entries() -> Result<Vec<InventoryItem>, TuneError> {
    Err(TuneError::Unsupported("读取启动项需要 Windows 注册表".to_string()))
}
