//! 配置加载
//!
//! 查找顺序: `--config` 参数 → `WIN_TUNE_CONFIG` 环境变量 →
//! `<config_dir>/win-tune/config.json` → 内置默认值。
//! 配置文件可以只写部分字段，未写的字段沿用内置值。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::TuneError;
use crate::modules::matcher::{Category, PatternTable};
use crate::modules::tables::{self, DomainTables, RegistryTweak};

pub const CONFIG_ENV: &str = "WIN_TUNE_CONFIG";

/// 派生计划任务搜索词的最小长度
pub const DEFAULT_MIN_TASK_TERM_LEN: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub startup: DomainTables,
    pub packages: DomainTables,
    pub protected_tasks: PatternTable,
    pub min_task_term_len: usize,
    pub services: Vec<String>,
    pub memory_tweaks: Vec<RegistryTweak>,
    pub privacy_tweaks: Vec<RegistryTweak>,
    pub temp_dirs: Vec<String>,
    pub log_globs: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            startup: tables::startup::default_tables(),
            packages: tables::packages::default_tables(),
            protected_tasks: tables::tasks::default_protected_tasks(),
            min_task_term_len: DEFAULT_MIN_TASK_TERM_LEN,
            services: to_strings(tables::maintenance::MANUAL_SERVICES),
            memory_tweaks: tables::maintenance::memory_tweaks(),
            privacy_tweaks: tables::maintenance::privacy_tweaks(),
            temp_dirs: to_strings(tables::maintenance::TEMP_DIRS),
            log_globs: to_strings(tables::maintenance::LOG_GLOBS),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DomainOverlay {
    protected: Option<PatternTable>,
    junk: Option<PatternTable>,
    optional: Option<PatternTable>,
}

impl DomainOverlay {
    fn apply(self, tables: &mut DomainTables) {
        if let Some(protected) = self.protected {
            tables.protected = protected.with_category(Category::Protected);
        }
        if let Some(junk) = self.junk {
            tables.junk = junk.with_category(Category::Junk);
        }
        if let Some(optional) = self.optional {
            tables.optional = optional.with_category(Category::Optional);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigOverlay {
    startup: DomainOverlay,
    packages: DomainOverlay,
    protected_tasks: Option<PatternTable>,
    min_task_term_len: Option<usize>,
    services: Option<Vec<String>>,
    memory_tweaks: Option<Vec<RegistryTweak>>,
    privacy_tweaks: Option<Vec<RegistryTweak>>,
    temp_dirs: Option<Vec<String>>,
    log_globs: Option<Vec<String>>,
}

/// 解析配置文件内容并叠加到默认值上
pub fn parse_config(json: &str) -> Result<AppConfig, TuneError> {
    let overlay: ConfigOverlay =
        serde_json::from_str(json).map_err(|e| TuneError::Config(e.to_string()))?;

    let mut config = AppConfig::default();
    overlay.startup.apply(&mut config.startup);
    overlay.packages.apply(&mut config.packages);

    if let Some(protected_tasks) = overlay.protected_tasks {
        config.protected_tasks = protected_tasks.with_category(Category::Protected);
    }
    if let Some(min_len) = overlay.min_task_term_len {
        if min_len == 0 {
            return Err(TuneError::Config("min_task_term_len 必须大于 0".to_string()));
        }
        config.min_task_term_len = min_len;
    }
    if let Some(services) = overlay.services {
        config.services = services;
    }
    if let Some(memory_tweaks) = overlay.memory_tweaks {
        config.memory_tweaks = memory_tweaks;
    }
    if let Some(privacy_tweaks) = overlay.privacy_tweaks {
        config.privacy_tweaks = privacy_tweaks;
    }
    if let Some(temp_dirs) = overlay.temp_dirs {
        config.temp_dirs = temp_dirs;
    }
    if let Some(log_globs) = overlay.log_globs {
        config.log_globs = log_globs;
    }

    Ok(config)
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("win-tune").join("config.json"))
}

/// 加载配置
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, TuneError> {
    let (path, required) = match explicit {
        Some(path) => (Some(path.to_path_buf()), true),
        None => match std::env::var_os(CONFIG_ENV) {
            Some(value) if !value.is_empty() => (Some(PathBuf::from(value)), true),
            _ => (default_config_path(), false),
        },
    };

    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    if !path.exists() {
        if required {
            return Err(TuneError::NotFound(format!("配置文件 {}", path.display())));
        }
        tracing::debug!("未找到配置文件 {}，使用内置规则", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let config = parse_config(&content)
        .map_err(|e| TuneError::Config(format!("{}: {}", path.display(), e)))?;

    tracing::info!("已加载配置文件 {}", path.display());
    Ok(config)
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
