use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuneError {
    #[error("注册表错误: {0}")]
    Registry(String),

    #[error("文件系统错误: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("应用包错误: {0}")]
    Package(String),

    #[error("计划任务错误: {0}")]
    ScheduledTask(String),

    #[error("权限不足: {0}")]
    PermissionDenied(String),

    #[error("受保护项: {0}")]
    ProtectedItem(String),

    #[error("未找到: {0}")]
    NotFound(String),

    #[error("命令执行失败: {0}")]
    Command(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("无效的匹配模式: {0}")]
    Pattern(String),

    #[error("当前平台不支持: {0}")]
    Unsupported(String),

    #[error("序列化错误: {0}")]
    Serde(String),

    #[error("其他错误: {0}")]
    Other(String),
}

impl From<serde_json::Error> for TuneError {
    fn from(error: serde_json::Error) -> Self {
        TuneError::Serde(error.to_string())
    }
}

impl serde::Serialize for TuneError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
