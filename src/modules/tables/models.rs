use serde::{Deserialize, Serialize};

use crate::modules::inventory::models::Hive;

/// 写入一个 DWORD 的注册表调整
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryTweak {
    pub label: String,
    pub hive: Hive,
    pub key: String,
    pub name: String,
    pub value: u32,
}

impl RegistryTweak {
    pub fn new(label: &str, hive: Hive, key: &str, name: &str, value: u32) -> Self {
        Self {
            label: label.to_string(),
            hive,
            key: key.to_string(),
            name: name.to_string(),
            value,
        }
    }
}

impl std::fmt::Display for RegistryTweak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}\\{}\\{} = {})", self.label, self.hive, self.key, self.name, self.value)
    }
}
