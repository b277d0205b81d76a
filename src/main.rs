use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use win_tune_lib::commands;
use win_tune_lib::modules::common::{config, logging};

#[derive(Parser, Debug)]
#[command(name = "win-tune")]
#[command(about = "Windows 启动项与预装应用清理工具", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 配置文件路径
    #[arg(long, global = true, env = "WIN_TUNE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 初始化日志
    logging::init_logging(cli.verbose);

    let result = run(cli.command, cli.config).await;

    if let Err(e) = result {
        if cli.verbose {
            tracing::error!("错误: {:#}", e);
        } else {
            eprintln!("错误: {:#}", e);
        }
        process::exit(1);
    }

    Ok(())
}

async fn run(command: commands::Command, config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load_config(config_path.as_deref())?;

    // 执行命令
    match command {
        commands::Command::List(cmd) => commands::list::execute(cmd, &config).await,
        commands::Command::Startup(cmd) => commands::startup::execute(cmd, &config).await,
        commands::Command::Bloatware(cmd) => commands::bloatware::execute(cmd, &config).await,
        commands::Command::Tasks(cmd) => commands::tasks::execute(cmd, &config).await,
        commands::Command::RunAll(cmd) => commands::run_all::execute(cmd, &config).await,
        commands::Command::Config(cmd) => commands::config::execute(cmd, &config).await,
    }
}
