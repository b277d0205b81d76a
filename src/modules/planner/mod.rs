//! 移除计划
//!
//! 按用户选择的模式从分类结果中挑出要处理的项。无论哪种模式、
//! 调用方传入什么，受保护项都不会进入计划。

pub mod models;
pub mod tasks;

use std::collections::HashSet;

use crate::modules::classifier::{Bucket, ClassifiedItem, Classification};
use crate::modules::common::error::TuneError;
use crate::modules::common::prompt::Confirm;
use crate::modules::matcher::PatternTable;
pub use models::{Mode, RemovalPlan};

pub struct RemovalPlanner<'a> {
    protected: &'a PatternTable,
    /// 设置后为计划派生计划任务搜索词
    min_task_term_len: Option<usize>,
}

impl<'a> RemovalPlanner<'a> {
    pub fn new(protected: &'a PatternTable) -> Self {
        Self {
            protected,
            min_task_term_len: None,
        }
    }

    /// 启动项计划: 同时派生关联计划任务的搜索词
    pub fn with_task_terms(mut self, min_len: usize) -> Self {
        self.min_task_term_len = Some(min_len.max(1));
        self
    }

    /// 按模式生成计划，需要逐项决定时通过 `confirm` 询问 (true 表示移除)
    pub fn plan(
        &self,
        classification: &Classification,
        mode: Mode,
        confirm: &mut dyn Confirm,
    ) -> RemovalPlan {
        let candidates: Vec<ClassifiedItem> = match mode {
            Mode::AllNonEssential => classification
                .junk
                .iter()
                .chain(classification.optional.iter())
                .cloned()
                .collect(),
            Mode::JunkOnly => classification.junk.clone(),
            Mode::JunkPlusChosen => {
                let mut chosen = classification.junk.clone();
                chosen.extend(ask_each(&classification.optional, confirm));
                chosen
            }
            Mode::Individual => {
                let all: Vec<ClassifiedItem> = classification
                    .junk
                    .iter()
                    .chain(classification.optional.iter())
                    .chain(classification.unknown.iter())
                    .cloned()
                    .collect();
                ask_each(&all, confirm)
            }
            Mode::None => Vec::new(),
        };

        tracing::debug!("模式 {}: {} 个候选项", mode, candidates.len());
        self.finalize(candidates)
    }

    /// 由调用方直接给出候选项生成计划，仍会剔除受保护项
    pub fn plan_explicit(&self, requested: Vec<ClassifiedItem>) -> RemovalPlan {
        self.finalize(requested)
    }

    fn finalize(&self, candidates: Vec<ClassifiedItem>) -> RemovalPlan {
        let mut seen = HashSet::new();
        let mut targets = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            if let Err(e) = self.check_not_protected(&candidate) {
                tracing::warn!("已从计划中剔除: {}", e);
                continue;
            }
            if seen.insert(candidate.item.clone()) {
                targets.push(candidate);
            }
        }

        let task_terms = self
            .min_task_term_len
            .map(|min_len| tasks::derive_task_terms(&targets, min_len))
            .unwrap_or_default();

        RemovalPlan {
            targets,
            task_terms,
        }
    }

    /// 既检查分组标记，也用白名单重新匹配，防止调用方伪造分组
    fn check_not_protected(&self, candidate: &ClassifiedItem) -> Result<(), TuneError> {
        if candidate.bucket == Bucket::Protected || self.protected.is_match(&candidate.item.id) {
            return Err(TuneError::ProtectedItem(candidate.to_string()));
        }
        Ok(())
    }
}

fn ask_each(items: &[ClassifiedItem], confirm: &mut dyn Confirm) -> Vec<ClassifiedItem> {
    items
        .iter()
        .filter(|item| confirm.confirm(&format!("移除 {} [{}]?", item, item.bucket)))
        .cloned()
        .collect()
}
