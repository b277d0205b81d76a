use anyhow::Result;
use clap::Parser;

use crate::modules::common::config::AppConfig;
use crate::modules::common::prompt::{AutoConfirm, Confirm, ConsoleConfirm};
use crate::modules::executor::ExecutionOutcome;
use crate::modules::maintenance::{clean_startup, CleanOptions};
use crate::modules::planner::Mode;
use crate::modules::system::WindowsHost;

#[derive(Parser, Debug)]
pub struct StartupCommand {
    /// 移除范围 (all|junk|junk-plus|individual|none)
    #[arg(long, default_value = "junk")]
    pub mode: Mode,

    /// 对所有提问回答 "是"
    #[arg(short, long)]
    pub yes: bool,

    /// 不禁用关联的计划任务
    #[arg(long)]
    pub no_tasks: bool,

    /// 只预览，不做修改
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn execute(cmd: StartupCommand, config: &AppConfig) -> Result<()> {
    let mut confirm: Box<dyn Confirm> = if cmd.yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(ConsoleConfirm::stdio())
    };

    if !cmd.dry_run && !cmd.yes {
        let prompt = format!("将以 \"{}\" 模式清理启动项，是否继续?", cmd.mode);
        if !confirm.confirm(&prompt) {
            println!("已取消");
            return Ok(());
        }
    }

    let options = CleanOptions {
        dry_run: cmd.dry_run,
        disable_tasks: !cmd.no_tasks,
    };
    let report = clean_startup(&WindowsHost, config, cmd.mode, confirm.as_mut(), options)?;

    println!(
        "\n启动项: 受保护 {}, 垃圾 {}, 可选 {}, 未知 {}",
        report.classification.protected.len(),
        report.classification.junk.len(),
        report.classification.optional.len(),
        report.classification.unknown.len()
    );

    if cmd.dry_run {
        println!("\n=== 预览模式 ===");
    }
    print_outcomes(&report.outcomes);

    if !report.task_outcomes.is_empty() {
        println!("\n关联的计划任务:");
        print_outcomes(&report.task_outcomes);
    }
    if let Some(err) = &report.task_error {
        println!("\n读取计划任务失败: {}", err);
    }

    let summary = report.summary();
    println!("\n--- 清理完成 ---");
    println!("  成功: {}", summary.succeeded);
    println!("  失败: {}", summary.failed);
    println!("  禁用计划任务: {}", report.task_summary().succeeded);

    Ok(())
}

pub(crate) fn print_outcomes<T: std::fmt::Display>(outcomes: &[ExecutionOutcome<T>]) {
    for outcome in outcomes {
        match &outcome.error {
            None => println!("  [成功] {}", outcome.item),
            Some(err) => println!("  [失败] {}: {}", outcome.item, err),
        }
    }
}
