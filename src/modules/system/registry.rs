use crate::modules::common::error::TuneError;
use crate::modules::inventory::models::{Hive, InventoryItem, SourceLocation};
use crate::modules::tables::RegistryTweak;

#[cfg(windows)]
pub fn predef(hive: Hive) -> winreg::RegKey {
    use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};

    match hive {
        Hive::CurrentUser => winreg::RegKey::predef(HKEY_CURRENT_USER),
        Hive::LocalMachine => winreg::RegKey::predef(HKEY_LOCAL_MACHINE),
    }
}

/// 删除启动项对应的 Run 键值
pub fn remove_startup_entry(item: &InventoryItem) -> Result<(), TuneError> {
    match &item.source {
        SourceLocation::RegistryValue { hive, key, value } => delete_value(*hive, key, value),
        other => Err(TuneError::Other(format!(
            "{} 不是注册表启动项: {}",
            item.id, other
        ))),
    }
}

#[cfg(windows)]
fn delete_value(hive: Hive, key_path: &str, value_name: &str) -> Result<(), TuneError> {
    use winreg::enums::KEY_SET_VALUE;

    let key = predef(hive)
        .open_subkey_with_flags(key_path, KEY_SET_VALUE)
        .map_err(|e| registry_error(&format!("{}\\{}", hive, key_path), e))?;

    match key.delete_value(value_name) {
        Ok(_) => {
            tracing::info!("已删除注册表值: {}\\{}\\{}", hive, key_path, value_name);
            Ok(())
        }
        // 值已不存在，视为成功
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(registry_error(value_name, e)),
    }
}

#[cfg(not(windows))]
fn delete_value(hive: Hive, key_path: &str, value_name: &str) -> Result<(), TuneError> {
    Err(TuneError::Unsupported(format!(
        "删除注册表值 {}\\{}\\{}",
        hive, key_path, value_name
    )))
}

/// 写入 DWORD 调整值，键不存在时创建
#[cfg(windows)]
pub fn apply_tweak(tweak: &RegistryTweak) -> Result<(), TuneError> {
    let (key, _) = predef(tweak.hive)
        .create_subkey(&tweak.key)
        .map_err(|e| registry_error(&format!("{}\\{}", tweak.hive, tweak.key), e))?;

    key.set_value(&tweak.name, &tweak.value)
        .map_err(|e| registry_error(&tweak.name, e))?;

    tracing::debug!("已写入 {}", tweak);
    Ok(())
}

#[cfg(not(windows))]
pub fn apply_tweak(tweak: &RegistryTweak) -> Result<(), TuneError> {
    Err(TuneError::Unsupported(format!("写入注册表 {}", tweak)))
}

#[cfg(windows)]
fn registry_error(context: &str, error: std::io::Error) -> TuneError {
    if error.kind() == std::io::ErrorKind::PermissionDenied {
        TuneError::PermissionDenied(format!("{}: {}", context, error))
    } else {
        TuneError::Registry(format!("{}: {}", context, error))
    }
}
