//! 内置规则表与维护步骤使用的静态数据

pub mod maintenance;
pub mod models;
pub mod packages;
pub mod startup;
pub mod tasks;

use serde::{Deserialize, Serialize};

use crate::modules::matcher::PatternTable;
pub use models::RegistryTweak;

/// 一个清单领域 (启动项或应用包) 的三张有序规则表
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainTables {
    pub protected: PatternTable,
    pub junk: PatternTable,
    pub optional: PatternTable,
}
