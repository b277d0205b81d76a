use anyhow::Result;
use clap::Parser;

use crate::modules::common::config::AppConfig;
use crate::modules::common::prompt::{Confirm, ConsoleConfirm};
use crate::modules::executor::{self, BatchSummary};
use crate::modules::planner::tasks::select_tasks;
use crate::modules::system::{Host, WindowsHost};

use super::startup::print_outcomes;

#[derive(Parser, Debug)]
pub struct TasksCommand {
    /// 任务名称中包含的关键词 (可多次指定)
    #[arg(long = "term", required = true)]
    pub terms: Vec<String>,

    /// 不再确认
    #[arg(short, long)]
    pub yes: bool,

    /// 只预览，不做修改
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn execute(cmd: TasksCommand, config: &AppConfig) -> Result<()> {
    let host = WindowsHost;
    let all_tasks = host.scheduled_tasks()?;
    let selected = select_tasks(&all_tasks, &cmd.terms, &config.protected_tasks);

    if selected.is_empty() {
        println!("没有匹配的计划任务");
        return Ok(());
    }

    println!("找到 {} 个匹配的计划任务:", selected.len());
    for task in &selected {
        println!("  {}", task);
    }

    if cmd.dry_run {
        println!("\n=== 预览模式 ===");
        return Ok(());
    }

    if !cmd.yes && !ConsoleConfirm::stdio().confirm("禁用以上计划任务?") {
        println!("已取消");
        return Ok(());
    }

    let outcomes = executor::execute(selected, |task| host.disable_task(task));
    print_outcomes(&outcomes);

    let summary = BatchSummary::from_outcomes(&outcomes);
    println!("\n  成功: {}", summary.succeeded);
    println!("  失败: {}", summary.failed);

    Ok(())
}
