use serde::{Deserialize, Serialize};

use crate::modules::classifier::ClassifiedItem;
use crate::modules::common::error::TuneError;

/// 移除范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// 垃圾 + 可选
    AllNonEssential,
    /// 仅垃圾
    JunkOnly,
    /// 垃圾 + 逐个确认的可选项
    JunkPlusChosen,
    /// 垃圾、可选、未知逐个确认
    Individual,
    /// 不移除
    None,
}

impl std::str::FromStr for Mode {
    type Err = TuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Mode::AllNonEssential),
            "junk" => Ok(Mode::JunkOnly),
            "junk-plus" => Ok(Mode::JunkPlusChosen),
            "individual" => Ok(Mode::Individual),
            "none" => Ok(Mode::None),
            other => Err(TuneError::Other(format!(
                "未知的模式 {} (可选: all|junk|junk-plus|individual|none)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::AllNonEssential => write!(f, "全部非必要项"),
            Mode::JunkOnly => write!(f, "仅垃圾项"),
            Mode::JunkPlusChosen => write!(f, "垃圾项 + 选定的可选项"),
            Mode::Individual => write!(f, "逐个选择"),
            Mode::None => write!(f, "不移除"),
        }
    }
}

/// 移除计划，只交给执行器使用一次
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemovalPlan {
    pub targets: Vec<ClassifiedItem>,
    /// 用于查找关联计划任务的搜索词，仅启动项计划会生成
    pub task_terms: Vec<String>,
}

impl RemovalPlan {
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
