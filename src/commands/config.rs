use anyhow::Result;
use clap::Parser;

use crate::modules::common::config::{default_config_path, AppConfig, CONFIG_ENV};
use crate::modules::common::logging::get_log_dir;

#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// 以 JSON 输出当前生效的完整配置
    #[arg(long)]
    pub dump: bool,
}

pub async fn execute(cmd: ConfigCommand, config: &AppConfig) -> Result<()> {
    if cmd.dump {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    let default_path = default_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(不可用)".to_string());

    println!("配置文件查找顺序:");
    println!("  1. --config <路径>");
    println!("  2. 环境变量 {}", CONFIG_ENV);
    println!("  3. {}", default_path);
    println!("  4. 内置规则");
    println!();
    println!("日志目录: {}", get_log_dir().display());
    println!();
    println!(
        "启动项规则: 受保护 {}, 垃圾 {}, 可选 {}",
        config.startup.protected.len(),
        config.startup.junk.len(),
        config.startup.optional.len()
    );
    println!(
        "应用规则: 受保护 {}, 垃圾 {}, 可选 {}",
        config.packages.protected.len(),
        config.packages.junk.len(),
        config.packages.optional.len()
    );
    println!("受保护计划任务规则: {}", config.protected_tasks.len());
    println!("计划任务搜索词最小长度: {}", config.min_task_term_len);

    Ok(())
}
