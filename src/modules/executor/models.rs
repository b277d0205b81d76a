use serde::{Deserialize, Serialize};

use crate::modules::classifier::ClassifiedItem;

/// 单项操作结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionOutcome<T = ClassifiedItem> {
    pub item: T,
    pub succeeded: bool,
    pub error: Option<String>,
}

/// 批量操作汇总
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes<T>(outcomes: &[ExecutionOutcome<T>]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.succeeded).count();
        Self {
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// 有操作且全部失败
    pub fn all_failed(&self) -> bool {
        self.total() > 0 && self.succeeded == 0
    }
}
