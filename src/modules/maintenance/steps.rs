//! "一键优化" 的八个步骤

use crate::modules::common::config::AppConfig;
use crate::modules::common::error::TuneError;
use crate::modules::common::prompt::AutoConfirm;
use crate::modules::common::utils;
use crate::modules::executor::{self, BatchSummary};
use crate::modules::pipeline::Pipeline;
use crate::modules::planner::Mode;
use crate::modules::system::{cleanup, Host};
use crate::modules::tables::RegistryTweak;

use super::startup::{clean_startup, CleanOptions};

pub const STEP_RESTORE_POINT: &str = "Creating Restore Point";
pub const STEP_SERVICES: &str = "Optimizing Services";
pub const STEP_STARTUP: &str = "Cleaning Startup Programs";
pub const STEP_MEMORY: &str = "Optimizing Memory";
pub const STEP_PRIVACY: &str = "Applying Privacy Shield";
pub const STEP_DISK: &str = "Cleaning Disk";
pub const STEP_NETWORK: &str = "Resetting Network Cache";
pub const STEP_LOGS: &str = "Cleaning Logs";

const RESTORE_POINT_DESCRIPTION: &str = "win-tune 维护前还原点";

/// 按固定顺序组装维护流程
pub fn build_maintenance_pipeline<'a>(host: &'a dyn Host, config: &'a AppConfig) -> Pipeline<'a> {
    Pipeline::new()
        .step(STEP_RESTORE_POINT, move || {
            host.create_restore_point(RESTORE_POINT_DESCRIPTION)
        })
        .step(STEP_SERVICES, move || {
            let outcomes = executor::execute(config.services.iter(), |name| host.set_service_manual(name));
            require_any(STEP_SERVICES, BatchSummary::from_outcomes(&outcomes))
        })
        .step(STEP_STARTUP, move || {
            let report = clean_startup(
                host,
                config,
                Mode::JunkOnly,
                &mut AutoConfirm(false),
                CleanOptions::default(),
            )?;
            let summary = report.summary();
            tracing::info!(
                "启动项: 移除 {} 项, 失败 {} 项; 禁用计划任务 {} 个",
                summary.succeeded,
                summary.failed,
                report.task_summary().succeeded
            );
            Ok(())
        })
        .step(STEP_MEMORY, move || apply_tweaks(host, STEP_MEMORY, &config.memory_tweaks))
        .step(STEP_PRIVACY, move || apply_tweaks(host, STEP_PRIVACY, &config.privacy_tweaks))
        .step(STEP_DISK, move || {
            let report = cleanup::clean_temp_dirs(&config.temp_dirs)?;
            tracing::info!(
                "磁盘清理: 删除 {} 个文件, 释放 {}, {} 个文件被占用",
                report.files_removed,
                utils::format_size(report.bytes_freed),
                report.failures
            );
            Ok(())
        })
        .step(STEP_NETWORK, move || host.flush_dns())
        .step(STEP_LOGS, move || {
            let report = cleanup::clean_log_globs(&config.log_globs)?;
            tracing::info!(
                "日志清理: 删除 {} 个文件, 释放 {}",
                report.files_removed,
                utils::format_size(report.bytes_freed)
            );
            Ok(())
        })
}

fn apply_tweaks(host: &dyn Host, step: &str, tweaks: &[RegistryTweak]) -> Result<(), TuneError> {
    let outcomes = executor::execute(tweaks.iter(), |tweak| host.apply_registry_tweak(tweak));
    require_any(step, BatchSummary::from_outcomes(&outcomes))
}

/// 整批全部失败时该步骤才算失败
fn require_any(step: &str, summary: BatchSummary) -> Result<(), TuneError> {
    tracing::info!("{}: 成功 {}, 失败 {}", step, summary.succeeded, summary.failed);
    if summary.all_failed() {
        return Err(TuneError::Other(format!("{} 的 {} 项操作全部失败", step, summary.total())));
    }
    Ok(())
}
