//! 清单分类
//!
//! 每一项按 白名单 → 垃圾 → 可选 的顺序匹配，都未命中则归为未知。
//! 白名单最先检查，任何 "已知垃圾" 规则都无法覆盖它。

pub mod models;

use crate::modules::inventory::models::InventoryItem;
use crate::modules::matcher::PatternTable;
use crate::modules::tables::DomainTables;
pub use models::{Bucket, ClassifiedItem, Classification};

pub struct Classifier<'a> {
    protected: &'a PatternTable,
    junk: &'a PatternTable,
    optional: &'a PatternTable,
}

impl<'a> Classifier<'a> {
    pub fn new(
        protected: &'a PatternTable,
        junk: &'a PatternTable,
        optional: &'a PatternTable,
    ) -> Self {
        Self {
            protected,
            junk,
            optional,
        }
    }

    pub fn for_domain(tables: &'a DomainTables) -> Self {
        Self::new(&tables.protected, &tables.junk, &tables.optional)
    }

    /// 对单项分类
    pub fn classify_item(&self, item: InventoryItem) -> ClassifiedItem {
        let checks = [
            (self.protected, Bucket::Protected),
            (self.junk, Bucket::Junk),
            (self.optional, Bucket::Optional),
        ];

        for (table, bucket) in checks {
            if let Some(entry) = table.first_match(&item.id) {
                return ClassifiedItem {
                    label: entry.label.clone(),
                    matched: Some(entry.clone()),
                    bucket,
                    item,
                };
            }
        }

        ClassifiedItem {
            label: item.id.clone(),
            matched: None,
            bucket: Bucket::Unknown,
            item,
        }
    }

    /// 对整份清单分类
    pub fn classify(&self, inventory: Vec<InventoryItem>) -> Classification {
        let mut result = Classification::default();

        for item in inventory {
            let classified = self.classify_item(item);
            tracing::debug!("{} -> {}", classified.item.id, classified.bucket);

            match classified.bucket {
                Bucket::Protected => result.protected.push(classified),
                Bucket::Junk => result.junk.push(classified),
                Bucket::Optional => result.optional.push(classified),
                Bucket::Unknown => result.unknown.push(classified),
            }
        }

        tracing::info!(
            "分类完成: 受保护 {}, 垃圾 {}, 可选 {}, 未知 {}",
            result.protected.len(),
            result.junk.len(),
            result.optional.len(),
            result.unknown.len()
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::inventory::models::{Hive, SourceLocation};
    use crate::modules::matcher::Category;

    fn item(id: &str) -> InventoryItem {
        InventoryItem::new(
            id,
            format!(r"C:\Program Files\{}\{}.exe", id, id),
            SourceLocation::RegistryValue {
                hive: Hive::CurrentUser,
                key: r"Software\Microsoft\Windows\CurrentVersion\Run".to_string(),
                value: id.to_string(),
            },
        )
    }

    fn ids(items: &[ClassifiedItem]) -> Vec<&str> {
        items.iter().map(|i| i.id()).collect()
    }

    #[test]
    fn discord_variants_share_label_and_system_entry_is_protected() {
        let protected = PatternTable::builtin(Category::Protected, &[("csrss", "")]);
        let junk = PatternTable::builtin(Category::Junk, &[("Discord*", "Discord")]);
        let optional = PatternTable::empty();

        let inventory = vec![
            item("csrss"),
            item("Discord"),
            item("Discord, Inc."),
            item("XYZCorpTool"),
        ];

        let result = Classifier::new(&protected, &junk, &optional).classify(inventory);

        assert_eq!(ids(&result.protected), vec!["csrss"]);
        assert_eq!(ids(&result.junk), vec!["Discord", "Discord, Inc."]);
        assert!(result.junk.iter().all(|i| i.label == "Discord"));
        assert!(result.optional.is_empty());
        assert_eq!(ids(&result.unknown), vec!["XYZCorpTool"]);
        assert_eq!(result.unknown[0].label, "XYZCorpTool");
        assert!(result.unknown[0].matched.is_none());
    }

    #[test]
    fn protected_wins_over_every_other_table() {
        let protected = PatternTable::builtin(Category::Protected, &[("*Security*", "Windows Security")]);
        let junk = PatternTable::builtin(Category::Junk, &[("SecurityHealth*", "junk")]);
        let optional = PatternTable::builtin(Category::Optional, &[("*", "anything")]);

        let result = Classifier::new(&protected, &junk, &optional)
            .classify(vec![item("SecurityHealth"), item("WindowsSecurityTray")]);

        assert_eq!(result.protected.len(), 2);
        assert!(result.junk.is_empty());
        assert!(result.optional.is_empty());
        assert_eq!(result.protected[0].bucket, Bucket::Protected);
    }

    #[test]
    fn junk_is_checked_before_optional() {
        let protected = PatternTable::empty();
        let junk = PatternTable::builtin(Category::Junk, &[("Spotify*", "Spotify (junk)")]);
        let optional = PatternTable::builtin(Category::Optional, &[("Spotify*", "Spotify")]);

        let classified = Classifier::new(&protected, &junk, &optional).classify_item(item("Spotify"));
        assert_eq!(classified.bucket, Bucket::Junk);
        assert_eq!(classified.label, "Spotify (junk)");
    }

    #[test]
    fn every_item_lands_in_exactly_one_bucket() {
        let protected = PatternTable::builtin(Category::Protected, &[("Sec*", ""), ("*Driver*", "")]);
        let junk = PatternTable::builtin(Category::Junk, &[("*Update*", ""), ("Sec*", "")]);
        let optional = PatternTable::builtin(Category::Optional, &[("*a*", "")]);

        let names = [
            "SecurityHealth", "AudioDriver", "GoogleUpdate", "Steam", "Zoom", "Xbox",
            "SecUpdate", "Teams", "Discord", "", "Adobe*Update", "Steam",
        ];
        let inventory: Vec<InventoryItem> = names.iter().map(|n| item(n)).collect();
        let result = Classifier::new(&protected, &junk, &optional).classify(inventory.clone());

        assert_eq!(result.len(), inventory.len());

        let mut flattened: Vec<InventoryItem> = result.iter().map(|c| c.item.clone()).collect();
        let mut expected = inventory;
        let key = |i: &InventoryItem| i.id.clone();
        flattened.sort_by_key(key);
        expected.sort_by_key(key);
        assert_eq!(flattened, expected);

        for c in result.iter() {
            let members = [Bucket::Protected, Bucket::Junk, Bucket::Optional, Bucket::Unknown]
                .iter()
                .filter(|b| result.bucket(**b).contains(c))
                .count();
            assert_eq!(members, 1, "{} 出现在多个分组", c.id());
        }
    }
}
