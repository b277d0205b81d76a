use anyhow::Result;
use clap::Parser;

use crate::modules::common::config::AppConfig;
use crate::modules::common::prompt::{AutoConfirm, Confirm, ConsoleConfirm};
use crate::modules::maintenance::remove_bloatware;
use crate::modules::planner::Mode;
use crate::modules::system::WindowsHost;

use super::startup::print_outcomes;

#[derive(Parser, Debug)]
pub struct BloatwareCommand {
    /// 移除范围 (all|junk|junk-plus|individual|none)
    #[arg(long, default_value = "junk")]
    pub mode: Mode,

    /// 对所有提问回答 "是"
    #[arg(short, long)]
    pub yes: bool,

    /// 只预览，不做修改
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn execute(cmd: BloatwareCommand, config: &AppConfig) -> Result<()> {
    let mut confirm: Box<dyn Confirm> = if cmd.yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(ConsoleConfirm::stdio())
    };

    if !cmd.dry_run && !cmd.yes {
        let prompt = format!("将以 \"{}\" 模式移除预装应用，是否继续?", cmd.mode);
        if !confirm.confirm(&prompt) {
            println!("已取消");
            return Ok(());
        }
    }

    let report = remove_bloatware(&WindowsHost, config, cmd.mode, confirm.as_mut(), cmd.dry_run)?;

    println!(
        "\n应用: 受保护 {}, 垃圾 {}, 可选 {}, 未知 {}",
        report.classification.protected.len(),
        report.classification.junk.len(),
        report.classification.optional.len(),
        report.classification.unknown.len()
    );

    if cmd.dry_run {
        println!("\n=== 预览模式 ===");
    }
    print_outcomes(&report.outcomes);

    let summary = report.summary();
    println!("\n--- 移除完成 ---");
    println!("  成功: {}", summary.succeeded);
    println!("  失败: {}", summary.failed);

    Ok(())
}
