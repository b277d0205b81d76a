//! 通配符模式匹配
//!
//! 模式表是有序的，同一个名称命中多条模式时总是返回表中最靠前的一条。
//! 白名单优先、具体模式优先于厂商级通配等规则都依赖这个顺序。

pub mod models;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::modules::common::error::TuneError;
pub use models::{Category, PatternEntry};

#[derive(Debug, Clone)]
struct CompiledEntry {
    entry: PatternEntry,
    regex: Regex,
}

/// 有序模式表
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<PatternEntry>", into = "Vec<PatternEntry>")]
pub struct PatternTable {
    entries: Vec<CompiledEntry>,
}

impl PatternTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// 编译一组规则，任何一条无效都会报错
    pub fn from_entries(entries: Vec<PatternEntry>) -> Result<Self, TuneError> {
        let entries = entries
            .into_iter()
            .map(|entry| {
                let entry = PatternEntry::new(entry.pattern, entry.label, entry.category);
                let regex = compile_glob(&entry.pattern)?;
                Ok(CompiledEntry { entry, regex })
            })
            .collect::<Result<Vec<_>, TuneError>>()?;

        Ok(Self { entries })
    }

    /// 由内置的 `(模式, 名称)` 列表构建，同一张表内的规则共用一个分类
    pub fn builtin(category: Category, rules: &[(&str, &str)]) -> Self {
        let entries = rules
            .iter()
            .filter_map(|(pattern, label)| {
                let entry = PatternEntry::new(*pattern, *label, category);
                match compile_glob(&entry.pattern) {
                    Ok(regex) => Some(CompiledEntry { entry, regex }),
                    Err(e) => {
                        tracing::error!("忽略无效的内置模式 {}: {}", pattern, e);
                        None
                    }
                }
            })
            .collect();

        Self { entries }
    }

    /// 把所有规则改为同一分类 (配置文件中的规则按所在的表归类)
    pub fn with_category(mut self, category: Category) -> Self {
        for compiled in &mut self.entries {
            compiled.entry.category = category;
        }
        self
    }

    /// 返回第一条匹配的规则
    pub fn first_match(&self, candidate: &str) -> Option<&PatternEntry> {
        self.entries
            .iter()
            .find(|compiled| compiled.regex.is_match(candidate))
            .map(|compiled| &compiled.entry)
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.first_match(candidate).is_some()
    }

    pub fn entries(&self) -> impl Iterator<Item = &PatternEntry> {
        self.entries.iter().map(|compiled| &compiled.entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<PatternEntry>> for PatternTable {
    type Error = TuneError;

    fn try_from(entries: Vec<PatternEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<PatternTable> for Vec<PatternEntry> {
    fn from(table: PatternTable) -> Self {
        table.entries.into_iter().map(|compiled| compiled.entry).collect()
    }
}

/// 在有序表中查找第一条匹配 `candidate` 的规则
pub fn find_match<'a>(candidate: &str, table: &'a PatternTable) -> Option<&'a PatternEntry> {
    table.first_match(candidate)
}

/// `*` 匹配任意长度字符，其余字符按字面匹配
fn compile_glob(pattern: &str) -> Result<Regex, TuneError> {
    if pattern.is_empty() {
        return Err(TuneError::Pattern("模式不能为空".to_string()));
    }

    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");

    RegexBuilder::new(&format!("^{}$", body))
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .map_err(|e| TuneError::Pattern(format!("{}: {}", pattern, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rules: &[(&str, &str)]) -> PatternTable {
        PatternTable::builtin(Category::Junk, rules)
    }

    #[test]
    fn star_matches_any_run_of_characters() {
        let t = table(&[("Discord*", "Discord")]);
        assert!(t.is_match("Discord"));
        assert!(t.is_match("Discord, Inc."));
        assert!(!t.is_match("MyDiscord"));

        let t = table(&[("*update*", "")]);
        assert!(t.is_match("GoogleUpdateTaskMachineUA"));
        assert!(t.is_match("update"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let t = table(&[("csrss", "")]);
        assert!(t.is_match("CSRSS"));
        assert!(t.is_match("Csrss"));
    }

    #[test]
    fn other_glob_syntax_is_literal() {
        let t = table(&[("App?[1].exe", "")]);
        assert!(t.is_match("app?[1].EXE"));
        assert!(!t.is_match("appX1.exe"));

        let t = table(&[("a.b", "")]);
        assert!(!t.is_match("aXb"));
    }

    #[test]
    fn first_match_wins_for_overlapping_patterns() {
        let t = table(&[
            ("Adobe Acrobat*", "Adobe Acrobat"),
            ("Adobe*", "Adobe"),
        ]);
        assert_eq!(t.first_match("Adobe Acrobat Update").unwrap().label, "Adobe Acrobat");
        assert_eq!(t.first_match("AdobeGCInvoker").unwrap().label, "Adobe");

        let reversed = table(&[
            ("Adobe*", "Adobe"),
            ("Adobe Acrobat*", "Adobe Acrobat"),
        ]);
        assert_eq!(find_match("Adobe Acrobat Update", &reversed).unwrap().label, "Adobe");
    }

    #[test]
    fn empty_table_never_matches() {
        let t = PatternTable::empty();
        assert!(t.is_empty());
        assert!(find_match("anything", &t).is_none());
    }

    #[test]
    fn label_defaults_to_pattern_without_wildcards() {
        let entry = PatternEntry::new("*Spotify*", "", Category::Optional);
        assert_eq!(entry.label, "Spotify");
        assert_eq!(PatternEntry::new("Discord*", "", Category::Junk).literal(), "Discord");
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let result = PatternTable::from_entries(vec![PatternEntry::new("", "x", Category::Junk)]);
        assert!(matches!(result, Err(TuneError::Pattern(_))));
    }

    #[test]
    fn table_round_trips_through_json() {
        let json = r#"[{"pattern": "OneDrive*", "label": "OneDrive", "category": "junk"}, {"pattern": "Steam*"}]"#;
        let t: PatternTable = serde_json::from_str(json).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.first_match("onedrivesetup").unwrap().category, Category::Junk);

        let back = serde_json::to_string(&t).unwrap();
        assert!(back.contains("OneDrive*"));
    }
}
