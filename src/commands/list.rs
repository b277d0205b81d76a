use anyhow::Result;
use clap::Parser;

use crate::modules::classifier::{ClassifiedItem, Classifier};
use crate::modules::common::config::AppConfig;
use crate::modules::common::utils::{fuzzy_match, truncate_string};
use crate::modules::inventory::models::ScheduledTask;
use crate::modules::planner::tasks::is_protected_task;
use crate::modules::system::{Host, WindowsHost};

#[derive(Parser, Debug)]
pub struct ListCommand {
    /// 清单类型 (startup|packages|tasks)
    pub kind: String,

    /// 输出格式 (table/json)
    #[arg(long, default_value = "table")]
    pub format: String,

    /// 搜索关键词
    #[arg(short, long)]
    pub search: Option<String>,
}

pub async fn execute(cmd: ListCommand, config: &AppConfig) -> Result<()> {
    tracing::info!("列出 {}, search: {:?}", cmd.kind, cmd.search);
    let host = WindowsHost;

    match cmd.kind.as_str() {
        "startup" => {
            let inventory = host.startup_entries()?;
            let classification = Classifier::for_domain(&config.startup).classify(inventory);
            let items = filter_items(classification.iter(), cmd.search.as_deref());
            output_items(&items, &cmd.format, "启动项")
        }
        "packages" => {
            let inventory = host.installed_packages()?;
            let classification = Classifier::for_domain(&config.packages).classify(inventory);
            let items = filter_items(classification.iter(), cmd.search.as_deref());
            output_items(&items, &cmd.format, "应用")
        }
        "tasks" => {
            let tasks: Vec<ScheduledTask> = host
                .scheduled_tasks()?
                .into_iter()
                .filter(|t| {
                    cmd.search
                        .as_deref()
                        .map_or(true, |s| fuzzy_match(&t.path, s))
                })
                .collect();

            if cmd.format == "json" {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                print_tasks(&tasks, config);
            }
            Ok(())
        }
        other => anyhow::bail!("未知的清单类型: {} (可选: startup|packages|tasks)", other),
    }
}

fn filter_items<'a>(
    items: impl Iterator<Item = &'a ClassifiedItem>,
    search: Option<&str>,
) -> Vec<&'a ClassifiedItem> {
    items
        .filter(|item| match search {
            Some(s) => fuzzy_match(item.id(), s) || fuzzy_match(&item.label, s),
            None => true,
        })
        .collect()
}

fn output_items(items: &[&ClassifiedItem], format: &str, noun: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(items)?);
        }
        _ => {
            print_table(items, noun);
        }
    }
    Ok(())
}

fn print_table(items: &[&ClassifiedItem], noun: &str) {
    println!("\n{}", "=".repeat(100));
    println!("{:<8} {:<30} {:<35} {:<25}", "分类", "名称", "ID", "位置");
    println!("{}", "=".repeat(100));

    for item in items {
        println!(
            "{:<8} {:<30} {:<35} {:<25}",
            item.bucket.to_string(),
            truncate_string(&item.label, 29),
            truncate_string(item.id(), 34),
            truncate_string(&item.item.source.to_string(), 24)
        );
    }

    println!("{}", "=".repeat(100));
    println!("总计: {} 个{}\n", items.len(), noun);
}

fn print_tasks(tasks: &[ScheduledTask], config: &AppConfig) {
    println!("\n{}", "=".repeat(100));
    println!("{:<70} {:<12} {:<8}", "任务路径", "状态", "受保护");
    println!("{}", "=".repeat(100));

    for task in tasks {
        let protected = if is_protected_task(task, &config.protected_tasks) {
            "是"
        } else {
            ""
        };
        println!(
            "{:<70} {:<12} {:<8}",
            truncate_string(&task.path, 69),
            truncate_string(&task.state, 11),
            protected
        );
    }

    println!("{}", "=".repeat(100));
    println!("总计: {} 个计划任务\n", tasks.len());
}
