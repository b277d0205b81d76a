use super::shell;
use crate::modules::common::error::TuneError;
use crate::modules::inventory::models::ScheduledTask;

/// 禁用计划任务
pub fn disable_task(task: &ScheduledTask) -> Result<(), TuneError> {
    shell::run_command("schtasks", &["/change", "/tn", &task.path, "/disable"])
        .map_err(|e| match e {
            TuneError::Command(msg) => TuneError::ScheduledTask(msg),
            other => other,
        })?;

    tracing::info!("已禁用计划任务: {}", task.path);
    Ok(())
}
