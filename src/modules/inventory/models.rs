use serde::{Deserialize, Serialize};

/// 注册表根键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hive {
    #[serde(rename = "HKCU")]
    CurrentUser,
    #[serde(rename = "HKLM")]
    LocalMachine,
}

impl std::fmt::Display for Hive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hive::CurrentUser => write!(f, "HKCU"),
            Hive::LocalMachine => write!(f, "HKLM"),
        }
    }
}

/// 清单项在系统中的位置，删除/禁用时使用
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceLocation {
    /// Run/RunOnce 下的注册表值
    RegistryValue {
        hive: Hive,
        key: String,
        value: String,
    },
    /// Appx 应用包
    AppxPackage { full_name: String },
    /// 计划任务
    ScheduledTask { path: String },
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLocation::RegistryValue { hive, key, value } => {
                write!(f, "{}\\{}\\{}", hive, key, value)
            }
            SourceLocation::AppxPackage { full_name } => write!(f, "{}", full_name),
            SourceLocation::ScheduledTask { path } => write!(f, "{}", path),
        }
    }
}

/// 从当前系统枚举出的一项 (启动项或已安装应用包)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryItem {
    /// 用于模式匹配的名称
    pub id: String,
    /// 原始值 (启动命令行、包版本等)
    pub raw_value: String,
    pub source: SourceLocation,
}

impl InventoryItem {
    pub fn new(id: impl Into<String>, raw_value: impl Into<String>, source: SourceLocation) -> Self {
        Self {
            id: id.into(),
            raw_value: raw_value.into(),
            source,
        }
    }
}

/// 计划任务
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// 完整路径，如 `\Microsoft\Windows\Defrag\ScheduledDefrag`
    pub path: String,
    /// 路径最后一段
    pub name: String,
    pub state: String,
}

impl ScheduledTask {
    pub fn from_path(path: impl Into<String>, state: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('\\').next().unwrap_or(&path).to_string();
        Self {
            path,
            name,
            state: state.into(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        let state = self.state.to_lowercase();
        state == "disabled" || state == "已禁用"
    }
}

impl std::fmt::Display for ScheduledTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}
