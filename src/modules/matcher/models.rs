use serde::{Deserialize, Serialize};

/// 模式所属的表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 白名单: 匹配后永不移除
    Protected,
    /// 确定的垃圾/预装软件
    Junk,
    /// 常见软件，移除前需要询问
    #[default]
    Optional,
}

/// 一条匹配规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    /// 只支持 `*` 通配符，大小写不敏感
    pub pattern: String,
    /// 展示名称，为空时取去掉通配符的模式文本
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub category: Category,
}

impl PatternEntry {
    pub fn new(pattern: impl Into<String>, label: impl Into<String>, category: Category) -> Self {
        let pattern = pattern.into();
        let mut label = label.into();
        if label.trim().is_empty() {
            label = pattern.replace('*', "").trim().to_string();
        }
        Self {
            pattern,
            label,
            category,
        }
    }

    /// 去掉通配符及其他非字母数字字符后的模式文本
    pub fn literal(&self) -> String {
        crate::modules::common::utils::strip_non_alphanumeric(&self.pattern)
    }
}
