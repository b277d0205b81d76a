//! 关联计划任务的搜索词派生与筛选

use crate::modules::classifier::ClassifiedItem;
use crate::modules::common::utils::strip_non_alphanumeric;
use crate::modules::inventory::models::ScheduledTask;
use crate::modules::matcher::PatternTable;

/// 为每个移除项派生搜索词: 去掉非字母数字后的名称，以及命中规则的字面文本。
/// 短于 `min_len` 的词会被丢弃，结果大小写不敏感去重并保持插入顺序。
pub fn derive_task_terms(targets: &[ClassifiedItem], min_len: usize) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();

    let mut push = |term: String| {
        if !terms.iter().any(|t| t.eq_ignore_ascii_case(&term)) {
            terms.push(term);
        }
    };

    for target in targets {
        let stripped_id = strip_non_alphanumeric(&target.item.id);
        if stripped_id.chars().count() >= min_len {
            push(stripped_id.clone());
        }

        if let Some(entry) = &target.matched {
            let literal = entry.literal();
            if literal.chars().count() >= min_len && !literal.eq_ignore_ascii_case(&stripped_id) {
                push(literal);
            }
        }
    }

    terms
}

/// 任务路径或名称命中受保护任务表
pub fn is_protected_task(task: &ScheduledTask, protected_tasks: &PatternTable) -> bool {
    protected_tasks.is_match(&task.path) || protected_tasks.is_match(&task.name)
}

/// 选出名称包含任一搜索词、且不受保护的任务
pub fn select_tasks(
    tasks: &[ScheduledTask],
    terms: &[String],
    protected_tasks: &PatternTable,
) -> Vec<ScheduledTask> {
    if terms.is_empty() {
        return Vec::new();
    }

    let lowered: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();

    tasks
        .iter()
        .filter(|task| {
            let name = task.name.to_lowercase();
            lowered.iter().any(|term| name.contains(term.as_str()))
        })
        .filter(|task| {
            if is_protected_task(task, protected_tasks) {
                tracing::info!("跳过受保护的计划任务: {}", task.path);
                return false;
            }
            if task.is_disabled() {
                tracing::debug!("计划任务已禁用: {}", task.path);
                return false;
            }
            true
        })
        .cloned()
        .collect()
}
