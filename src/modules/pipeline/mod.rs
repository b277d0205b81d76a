//! 顺序执行的维护流程
//!
//! 步骤严格按声明顺序逐个执行。某一步失败时记录错误，并询问是否继续
//! (最后一步失败不再询问)；回答 "否" 时剩余步骤保持 Pending，不会执行。

pub mod models;

use chrono::Utc;

use crate::modules::common::error::TuneError;
use crate::modules::common::prompt::Confirm;
pub use models::{PipelineRun, PipelineState, StepRecord, StepStatus};

pub type StepAction<'a> = Box<dyn FnMut() -> Result<(), TuneError> + 'a>;

pub struct PipelineStep<'a> {
    pub name: String,
    action: StepAction<'a>,
}

impl<'a> PipelineStep<'a> {
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: FnMut() -> Result<(), TuneError> + 'a,
    {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }
}

#[derive(Default)]
pub struct Pipeline<'a> {
    steps: Vec<PipelineStep<'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn step<F>(mut self, name: impl Into<String>, action: F) -> Self
    where
        F: FnMut() -> Result<(), TuneError> + 'a,
    {
        self.steps.push(PipelineStep::new(name, action));
        self
    }

    pub fn push(&mut self, step: PipelineStep<'a>) {
        self.steps.push(step);
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// 执行全部步骤，`confirm` 用于失败后决定是否继续
    pub fn run(mut self, confirm: &mut dyn Confirm) -> PipelineRun {
        let mut run = PipelineRun::new(self.steps.iter().map(|s| s.name.clone()));
        let total = self.steps.len();

        run.state = PipelineState::InProgress;
        run.started_at = Some(Utc::now());
        tracing::info!("开始执行维护流程 ({} 个步骤)", total);

        for (index, step) in self.steps.iter_mut().enumerate() {
            let record = &mut run.steps[index];
            record.status = StepStatus::Running;
            tracing::info!("[{}/{}] {}", index + 1, total, step.name);

            match (step.action)() {
                Ok(()) => {
                    record.status = StepStatus::Completed;
                    run.completed_steps.push(step.name.clone());
                }
                Err(e) => {
                    tracing::error!("步骤 {} 失败: {}", step.name, e);
                    record.status = StepStatus::Failed;
                    record.error = Some(e.to_string());
                    run.failed_steps.push(step.name.clone());

                    let is_last = index + 1 == total;
                    if !is_last {
                        let prompt = format!("步骤 \"{}\" 失败: {}。是否继续执行剩余步骤?", step.name, e);
                        if !confirm.confirm(&prompt) {
                            tracing::warn!("用户选择在步骤 {} 之后停止", step.name);
                            run.aborted = true;
                            break;
                        }
                    }
                }
            }
        }

        run.state = PipelineState::Finished;
        run.finished_at = Some(Utc::now());
        tracing::info!(
            "维护流程结束: 完成 {}, 失败 {}",
            run.completed_steps.len(),
            run.failed_steps.len()
        );

        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::common::prompt::AutoConfirm;
    use std::cell::RefCell;

    const NAMES: [&str; 8] = [
        "Creating Restore Point",
        "Optimizing Services",
        "Cleaning Startup Programs",
        "Optimizing Memory",
        "Applying Privacy Shield",
        "Cleaning Disk",
        "Resetting Network Cache",
        "Cleaning Logs",
    ];

    /// 构建 8 步流程，`failing` 中的步骤 (从 0 开始) 会返回错误
    fn eight_steps<'a>(failing: &'a [usize], attempted: &'a RefCell<Vec<usize>>) -> Pipeline<'a> {
        let mut pipeline = Pipeline::new();
        for (index, &name) in NAMES.iter().enumerate() {
            pipeline.push(PipelineStep::new(name, move || {
                attempted.borrow_mut().push(index);
                if failing.contains(&index) {
                    Err(TuneError::Other(format!("{} 出错", name)))
                } else {
                    Ok(())
                }
            }));
        }
        pipeline
    }

    #[test]
    fn failed_step_does_not_block_later_steps_when_continuing() {
        let attempted = RefCell::new(Vec::new());
        let run = eight_steps(&[2], &attempted).run(&mut AutoConfirm(true));

        assert_eq!(*attempted.borrow(), (0..8).collect::<Vec<_>>());
        assert_eq!(run.failed_steps, vec![NAMES[2].to_string()]);
        assert_eq!(run.completed_steps.len(), 7);
        assert!(!run.completed_steps.contains(&NAMES[2].to_string()));
        assert_eq!(run.state, PipelineState::Finished);
        assert!(run.steps[2].error.as_deref().unwrap().contains("出错"));
        assert!(!run.aborted);
    }

    #[test]
    fn answering_no_stops_and_leaves_remaining_steps_pending() {
        let attempted = RefCell::new(Vec::new());
        let run = eight_steps(&[2], &attempted).run(&mut AutoConfirm(false));

        assert_eq!(*attempted.borrow(), vec![0, 1, 2]);
        assert_eq!(run.completed_steps, vec![NAMES[0].to_string(), NAMES[1].to_string()]);
        assert_eq!(run.failed_steps, vec![NAMES[2].to_string()]);
        assert_eq!(run.pending_steps(), NAMES[3..].to_vec());
        assert!(run.aborted);
        assert_eq!(run.state, PipelineState::Finished);
        assert!(run.elapsed().is_some());
    }

    #[test]
    fn restore_point_failure_in_automated_mode_runs_everything_else() {
        let attempted = RefCell::new(Vec::new());
        let run = eight_steps(&[0], &attempted).run(&mut AutoConfirm(true));

        assert_eq!(attempted.borrow().len(), 8);
        assert_eq!(run.failed_steps, vec!["Creating Restore Point".to_string()]);
        assert_eq!(run.completed_steps, NAMES[1..].iter().map(|s| s.to_string()).collect::<Vec<_>>());
        assert!(!run.is_success());
    }

    #[test]
    fn last_step_failure_does_not_ask() {
        let attempted = RefCell::new(Vec::new());
        let mut asked = 0;
        let mut confirm = |_: &str| {
            asked += 1;
            false
        };
        let run = eight_steps(&[7], &attempted).run(&mut confirm);

        assert_eq!(asked, 0);
        assert_eq!(run.completed_steps.len(), 7);
        assert_eq!(run.failed_steps, vec![NAMES[7].to_string()]);
        assert!(!run.aborted);
    }

    #[test]
    fn each_attempted_step_is_in_exactly_one_list() {
        let attempted = RefCell::new(Vec::new());
        let run = eight_steps(&[1, 4, 6], &attempted).run(&mut AutoConfirm(true));

        assert!(run.completed_steps.len() + run.failed_steps.len() <= run.steps.len());
        for name in NAMES {
            let in_completed = run.completed_steps.iter().any(|s| s == name);
            let in_failed = run.failed_steps.iter().any(|s| s == name);
            assert!(in_completed ^ in_failed, "{}", name);
        }
        assert_eq!(run.status_of(NAMES[4]), Some(StepStatus::Failed));
        assert_eq!(run.status_of(NAMES[5]), Some(StepStatus::Completed));
    }

    #[test]
    fn new_run_starts_not_started_with_pending_steps() {
        let run = PipelineRun::new(NAMES.iter().map(|s| s.to_string()));
        assert_eq!(run.state, PipelineState::NotStarted);
        assert_eq!(run.pending_steps().len(), 8);
        assert!(run.elapsed().is_none());
    }

    #[test]
    fn empty_pipeline_finishes_immediately() {
        let run = Pipeline::new().run(&mut AutoConfirm(false));
        assert_eq!(run.state, PipelineState::Finished);
        assert!(run.is_success());
    }
}
