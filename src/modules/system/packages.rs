use super::shell;
use crate::modules::common::error::TuneError;
use crate::modules::inventory::models::{InventoryItem, SourceLocation};

/// 卸载 Appx 应用包
pub fn remove_package(item: &InventoryItem) -> Result<(), TuneError> {
    let SourceLocation::AppxPackage { full_name } = &item.source else {
        return Err(TuneError::Package(format!("{} 不是应用包: {}", item.id, item.source)));
    };

    shell::run_powershell(&format!(
        "Remove-AppxPackage -Package {} -ErrorAction Stop",
        shell::quote_ps(full_name)
    ))?;

    tracing::info!("已卸载应用包: {}", full_name);
    Ok(())
}
