use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use regex::Regex;
use std::sync::OnceLock;

/// 模糊匹配字符串
pub fn fuzzy_match(text: &str, pattern: &str) -> bool {
    let matcher = SkimMatcherV2::default();
    matcher.fuzzy_match(text, pattern).is_some()
}

/// 格式化文件大小
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 格式化耗时 (mm:ss)
pub fn format_elapsed(elapsed: chrono::TimeDelta) -> String {
    let total = elapsed.num_seconds().max(0);
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// 生成唯一 ID
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 去掉所有非字母数字字符
pub fn strip_non_alphanumeric(text: &str) -> String {
    text.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// 展开 `%VAR%` 形式的环境变量，未定义的变量保持原样
pub fn expand_env_vars(text: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| Regex::new(r"%([A-Za-z0-9_()]+)%").expect("valid regex"));

    re.replace_all(text, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    })
    .into_owned()
}

/// 截断字符串用于表格输出
pub fn truncate_string(s: &str, max_len: usize) -> String {
    // 按 char 边界截断，避免切断多字节字符
    if s.chars().count() > max_len {
        let chars: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", chars)
    } else {
        s.to_string()
    }
}
