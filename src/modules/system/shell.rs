use std::process::Command;

use crate::modules::common::error::TuneError;

/// 执行外部命令，返回标准输出；非零退出码视为失败
pub fn run_command(program: &str, args: &[&str]) -> Result<String, TuneError> {
    tracing::debug!("执行命令: {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| TuneError::Command(format!("无法启动 {}: {}", program, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let detail = if stderr.is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr
        };
        return Err(classify_failure(program, output.status.code(), &detail));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// 通过 PowerShell 执行脚本
pub fn run_powershell(script: &str) -> Result<String, TuneError> {
    run_command(
        "powershell",
        &[
            "-NoProfile",
            "-NonInteractive",
            "-ExecutionPolicy",
            "Bypass",
            "-Command",
            script,
        ],
    )
}

/// 转义 PowerShell 单引号字符串
pub fn quote_ps(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn classify_failure(program: &str, code: Option<i32>, detail: &str) -> TuneError {
    let lowered = detail.to_lowercase();
    let message = format!("{} (退出码 {:?}): {}", program, code, detail);

    if lowered.contains("access is denied")
        || lowered.contains("access denied")
        || detail.contains("拒绝访问")
    {
        TuneError::PermissionDenied(message)
    } else {
        TuneError::Command(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ps_doubles_single_quotes() {
        assert_eq!(quote_ps("O'Brien.App"), "'O''Brien.App'");
    }

    #[test]
    fn access_denied_output_maps_to_permission_error() {
        assert!(matches!(
            classify_failure("schtasks", Some(1), "ERROR: Access is denied."),
            TuneError::PermissionDenied(_)
        ));
        assert!(matches!(
            classify_failure("sc", Some(1060), "指定的服务未安装。"),
            TuneError::Command(_)
        ));
    }

    #[test]
    fn missing_program_is_a_command_error() {
        let result = run_command("win-tune-surely-missing-binary", &[]);
        assert!(matches!(result, Err(TuneError::Command(_))));
    }
}
