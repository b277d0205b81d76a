use super::shell;
use crate::modules::common::error::TuneError;

/// 把服务改为手动启动
pub fn set_service_manual(name: &str) -> Result<(), TuneError> {
    // sc 的参数格式要求 "start=" 与值分开
    shell::run_command("sc", &["config", name, "start=", "demand"])?;
    Ok(())
}
