use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// 单个步骤的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// 整个流程的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub name: String,
    pub status: StepStatus,
    pub error: Option<String>,
}

/// 一次流程执行的记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRun {
    pub id: String,
    pub state: PipelineState,
    pub steps: Vec<StepRecord>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub completed_steps: Vec<String>,
    pub failed_steps: Vec<String>,
    /// 用户在失败后选择停止
    pub aborted: bool,
}

impl PipelineRun {
    pub fn new(step_names: impl IntoIterator<Item = String>) -> Self {
        Self {
            id: crate::modules::common::utils::generate_id(),
            state: PipelineState::NotStarted,
            steps: step_names
                .into_iter()
                .map(|name| StepRecord {
                    name,
                    status: StepStatus::Pending,
                    error: None,
                })
                .collect(),
            started_at: None,
            finished_at: None,
            completed_steps: Vec::new(),
            failed_steps: Vec::new(),
            aborted: false,
        }
    }

    pub fn elapsed(&self) -> Option<TimeDelta> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    pub fn status_of(&self, name: &str) -> Option<StepStatus> {
        self.steps.iter().find(|s| s.name == name).map(|s| s.status)
    }

    /// 从未执行的步骤
    pub fn pending_steps(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Pending)
            .map(|s| s.name.as_str())
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.state == PipelineState::Finished && self.failed_steps.is_empty() && !self.aborted
    }
}
