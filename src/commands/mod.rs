pub mod bloatware;
pub mod config;
pub mod list;
pub mod run_all;
pub mod startup;
pub mod tasks;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 列出启动项、应用或计划任务及其分类
    List(list::ListCommand),

    /// 清理启动项
    Startup(startup::StartupCommand),

    /// 移除预装应用
    Bloatware(bloatware::BloatwareCommand),

    /// 禁用匹配关键词的计划任务
    Tasks(tasks::TasksCommand),

    /// 按顺序执行全部维护步骤
    RunAll(run_all::RunAllCommand),

    /// 查看配置
    Config(config::ConfigCommand),
}
