use serde::{Deserialize, Serialize};

use crate::modules::inventory::models::InventoryItem;
use crate::modules::matcher::PatternEntry;

/// 分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Protected,
    Junk,
    Optional,
    Unknown,
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bucket::Protected => write!(f, "受保护"),
            Bucket::Junk => write!(f, "垃圾"),
            Bucket::Optional => write!(f, "可选"),
            Bucket::Unknown => write!(f, "未知"),
        }
    }
}

/// 已分类的清单项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedItem {
    pub item: InventoryItem,
    pub bucket: Bucket,
    pub label: String,
    pub matched: Option<PatternEntry>,
}

impl ClassifiedItem {
    pub fn id(&self) -> &str {
        &self.item.id
    }
}

impl std::fmt::Display for ClassifiedItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.label == self.item.id {
            write!(f, "{}", self.item.id)
        } else {
            write!(f, "{} ({})", self.label, self.item.id)
        }
    }
}

/// 四个互不相交的分组，各自保持清单中的原始顺序
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Classification {
    pub protected: Vec<ClassifiedItem>,
    pub junk: Vec<ClassifiedItem>,
    pub optional: Vec<ClassifiedItem>,
    pub unknown: Vec<ClassifiedItem>,
}

impl Classification {
    pub fn len(&self) -> usize {
        self.protected.len() + self.junk.len() + self.optional.len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bucket(&self, bucket: Bucket) -> &[ClassifiedItem] {
        match bucket {
            Bucket::Protected => &self.protected,
            Bucket::Junk => &self.junk,
            Bucket::Optional => &self.optional,
            Bucket::Unknown => &self.unknown,
        }
    }

    /// 按 受保护/垃圾/可选/未知 的顺序遍历全部项
    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedItem> {
        self.protected
            .iter()
            .chain(self.junk.iter())
            .chain(self.optional.iter())
            .chain(self.unknown.iter())
    }

    /// 可以移除的项数 (垃圾 + 可选)
    pub fn removable_count(&self) -> usize {
        self.junk.len() + self.optional.len()
    }
}
