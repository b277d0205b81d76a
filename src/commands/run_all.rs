use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::modules::common::config::AppConfig;
use crate::modules::common::prompt::{AutoConfirm, Confirm, ConsoleConfirm};
use crate::modules::common::utils::format_elapsed;
use crate::modules::maintenance::build_maintenance_pipeline;
use crate::modules::pipeline::{PipelineRun, StepStatus};
use crate::modules::system::{self, Host, WindowsHost};

#[derive(Parser, Debug)]
pub struct RunAllCommand {
    /// 不再确认，失败后继续执行，结束后不重启
    #[arg(short, long)]
    pub yes: bool,

    /// 结束后不询问是否重启
    #[arg(long)]
    pub no_reboot_prompt: bool,

    /// 将运行记录写入 JSON 文件
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn execute(cmd: RunAllCommand, config: &AppConfig) -> Result<()> {
    if !system::is_elevated() {
        println!("警告: 当前未以管理员身份运行，部分步骤可能失败\n");
    }

    let mut confirm: Box<dyn Confirm> = if cmd.yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(ConsoleConfirm::stdio())
    };

    if !cmd.yes && !confirm.confirm("即将执行全部维护步骤，是否继续?") {
        println!("已取消");
        return Ok(());
    }

    let host = WindowsHost;
    let run = build_maintenance_pipeline(&host, config).run(confirm.as_mut());

    print_run(&run);

    if let Some(path) = &cmd.output {
        std::fs::write(path, serde_json::to_string_pretty(&run)?)?;
        println!("\n运行记录已保存: {}", path.display());
    }

    if !cmd.yes && !cmd.no_reboot_prompt && confirm.confirm("需要重启才能使全部更改生效，现在重启?") {
        println!("系统将在 10 秒后重启");
        host.reboot()?;
    }

    Ok(())
}

fn print_run(run: &PipelineRun) {
    println!("\n{}", "=".repeat(60));
    for step in &run.steps {
        let status = match step.status {
            StepStatus::Completed => "完成",
            StepStatus::Failed => "失败",
            StepStatus::Running => "中断",
            StepStatus::Pending => "未执行",
        };
        match &step.error {
            Some(err) => println!("  [{}] {}: {}", status, step.name, err),
            None => println!("  [{}] {}", status, step.name),
        }
    }
    println!("{}", "=".repeat(60));

    println!("  完成: {}", run.completed_steps.len());
    println!("  失败: {}", run.failed_steps.len());
    if let Some(elapsed) = run.elapsed() {
        println!("  耗时: {}", format_elapsed(elapsed));
    }
    if run.aborted {
        println!("  已按要求提前停止");
    }
}
