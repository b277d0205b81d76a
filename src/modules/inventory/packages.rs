use super::models::{InventoryItem, SourceLocation};
use crate::modules::common::error::TuneError;
use crate::modules::system::shell;

/// 列出当前用户的 Appx 应用包 (不含框架包)
pub fn list_installed_packages() -> Result<Vec<InventoryItem>, TuneError> {
    if !cfg!(windows) {
        return Err(TuneError::Unsupported("应用包列表需要 Windows".to_string()));
    }

    let json = shell::run_powershell(
        r#"
        Get-AppxPackage | Where-Object { $_.IsFramework -eq $false -and $_.NonRemovable -ne $true } | ForEach-Object {
            [PSCustomObject]@{
                Name = $_.Name
                Version = "$($_.Version)"
                PackageFullName = $_.PackageFullName
            }
        } | ConvertTo-Json -Depth 2
        "#,
    )
    .map_err(|e| TuneError::Package(format!("获取应用包失败: {}", e)))?;

    parse_appx_packages(&json)
}

/// 解析 `ConvertTo-Json` 的输出，兼容单个对象和数组两种形式
pub fn parse_appx_packages(json_str: &str) -> Result<Vec<InventoryItem>, TuneError> {
    let json_str = json_str.trim();
    if json_str.is_empty() {
        return Ok(Vec::new());
    }

    let packages: Vec<AppxPackageJson> = if json_str.starts_with('[') {
        serde_json::from_str(json_str)?
    } else {
        vec![serde_json::from_str(json_str)?]
    };

    let items = packages
        .into_iter()
        .filter_map(|pkg| {
            let name = pkg.name.filter(|n| !n.is_empty())?;
            let full_name = pkg.package_full_name.unwrap_or_else(|| name.clone());
            Some(InventoryItem::new(
                name,
                pkg.version.unwrap_or_default(),
                SourceLocation::AppxPackage { full_name },
            ))
        })
        .collect();

    Ok(items)
}

#[derive(serde::Deserialize, Debug)]
struct AppxPackageJson {
    #[serde(rename = "Name")]
    name: Option<String>,

    #[serde(rename = "Version")]
    version: Option<String>,

    #[serde(rename = "PackageFullName")]
    package_full_name: Option<String>,
}
