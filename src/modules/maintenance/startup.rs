use serde::Serialize;

use crate::modules::classifier::{ClassifiedItem, Classification, Classifier};
use crate::modules::common::config::AppConfig;
use crate::modules::common::error::TuneError;
use crate::modules::common::prompt::Confirm;
use crate::modules::executor::{self, BatchSummary, ExecutionOutcome};
use crate::modules::inventory::models::ScheduledTask;
use crate::modules::planner::tasks::{derive_task_terms, select_tasks};
use crate::modules::planner::{Mode, RemovalPlan, RemovalPlanner};
use crate::modules::system::Host;

#[derive(Debug, Clone, Copy)]
pub struct CleanOptions {
    /// 只预览，不实际删除
    pub dry_run: bool,
    /// 同时禁用关联的计划任务
    pub disable_tasks: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            disable_tasks: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StartupReport {
    pub classification: Classification,
    pub task_terms: Vec<String>,
    pub outcomes: Vec<ExecutionOutcome>,
    pub task_outcomes: Vec<ExecutionOutcome<ScheduledTask>>,
    /// 读取计划任务失败时的错误
    pub task_error: Option<String>,
}

impl StartupReport {
    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_outcomes(&self.outcomes)
    }

    pub fn task_summary(&self) -> BatchSummary {
        BatchSummary::from_outcomes(&self.task_outcomes)
    }
}

/// 分类启动项、按模式移除，并禁用关联的计划任务
pub fn clean_startup(
    host: &dyn Host,
    config: &AppConfig,
    mode: Mode,
    confirm: &mut dyn Confirm,
    options: CleanOptions,
) -> Result<StartupReport, TuneError> {
    let inventory = host.startup_entries()?;
    let classification = Classifier::for_domain(&config.startup).classify(inventory);

    let RemovalPlan { targets, .. } =
        RemovalPlanner::new(&config.startup.protected).plan(&classification, mode, confirm);

    tracing::info!("启动项计划 ({}): {} 项", mode, targets.len());

    let outcomes = if options.dry_run {
        executor::dry_run(targets)
    } else {
        executor::execute(targets, |target| host.remove_startup_entry(&target.item))
    };

    // 只为确实移除成功的项查找关联任务
    let removed: Vec<ClassifiedItem> = outcomes
        .iter()
        .filter(|o| o.succeeded)
        .map(|o| o.item.clone())
        .collect();
    let task_terms = derive_task_terms(&removed, config.min_task_term_len.max(1));

    let mut task_outcomes = Vec::new();
    let mut task_error = None;

    if options.disable_tasks && !task_terms.is_empty() {
        tracing::debug!("计划任务搜索词: {:?}", task_terms);
        match host.scheduled_tasks() {
            Ok(all_tasks) => {
                let selected = select_tasks(&all_tasks, &task_terms, &config.protected_tasks);
                task_outcomes = if options.dry_run {
                    executor::dry_run(selected)
                } else {
                    executor::execute(selected, |task| host.disable_task(task))
                };
            }
            Err(e) => {
                tracing::warn!("读取计划任务失败: {}", e);
                task_error = Some(e.to_string());
            }
        }
    }

    Ok(StartupReport {
        classification,
        task_terms,
        outcomes,
        task_outcomes,
        task_error,
    })
}
