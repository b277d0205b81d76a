use super::models::RegistryTweak;
use crate::modules::inventory::models::Hive;

/// 改为手动启动的非必要服务
pub const MANUAL_SERVICES: &[&str] = &[
    "DiagTrack",                // 连接用户体验和遥测
    "dmwappushservice",         // WAP 推送消息路由
    "MapsBroker",               // 下载的地图管理器
    "RetailDemo",               // 零售演示服务
    "WSearch",                  // Windows Search
    "SysMain",                  // SysMain (Superfetch)
    "Fax",                      // 传真
    "XblAuthManager",           // Xbox Live 身份验证管理器
    "XblGameSave",              // Xbox Live 游戏保存
    "XboxNetApiSvc",            // Xbox Live 网络服务
    "XboxGipSvc",               // Xbox 配件管理
    "lfsvc",                    // 地理位置服务
    "WMPNetworkSvc",            // Windows Media Player 网络共享
    "RemoteRegistry",           // 远程注册表
    "PhoneSvc",                 // 电话服务
    "wisvc",                    // Windows 预览体验成员服务
];

const MEMORY_KEY: &str = r"SYSTEM\CurrentControlSet\Control\Session Manager\Memory Management";
const VISUAL_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Explorer\VisualEffects";
const DESKTOP_KEY: &str = r"Control Panel\Desktop";

pub fn memory_tweaks() -> Vec<RegistryTweak> {
    vec![
        RegistryTweak::new("驱动程序常驻内存", Hive::LocalMachine, MEMORY_KEY, "DisablePagingExecutive", 1),
        RegistryTweak::new("关机不清空页面文件", Hive::LocalMachine, MEMORY_KEY, "ClearPageFileAtShutdown", 0),
        RegistryTweak::new("视觉效果: 最佳性能", Hive::CurrentUser, VISUAL_KEY, "VisualFXSetting", 2),
        RegistryTweak::new("关闭启动延迟", Hive::CurrentUser, r"Software\Microsoft\Windows\CurrentVersion\Explorer\Serialize", "StartupDelayInMSec", 0),
        RegistryTweak::new("自动结束无响应任务", Hive::CurrentUser, DESKTOP_KEY, "AutoEndTasks", 1),
    ]
}

pub fn privacy_tweaks() -> Vec<RegistryTweak> {
    vec![
        RegistryTweak::new("关闭遥测", Hive::LocalMachine, r"SOFTWARE\Policies\Microsoft\Windows\DataCollection", "AllowTelemetry", 0),
        RegistryTweak::new("关闭广告 ID", Hive::CurrentUser, r"Software\Microsoft\Windows\CurrentVersion\AdvertisingInfo", "Enabled", 0),
        RegistryTweak::new("关闭活动历史", Hive::LocalMachine, r"SOFTWARE\Policies\Microsoft\Windows\System", "PublishUserActivities", 0),
        RegistryTweak::new("关闭定制体验", Hive::CurrentUser, r"Software\Microsoft\Windows\CurrentVersion\Privacy", "TailoredExperiencesWithDiagnosticDataEnabled", 0),
        RegistryTweak::new("关闭开始菜单建议", Hive::CurrentUser, r"Software\Microsoft\Windows\CurrentVersion\ContentDeliveryManager", "SystemPaneSuggestionsEnabled", 0),
        RegistryTweak::new("关闭静默安装推广应用", Hive::CurrentUser, r"Software\Microsoft\Windows\CurrentVersion\ContentDeliveryManager", "SilentInstalledAppsEnabled", 0),
        RegistryTweak::new("关闭 Bing 搜索", Hive::CurrentUser, r"Software\Microsoft\Windows\CurrentVersion\Search", "BingSearchEnabled", 0),
        RegistryTweak::new("关闭反馈频率提示", Hive::CurrentUser, r"Software\Microsoft\Siuf\Rules", "NumberOfSIUFInPeriod", 0),
    ]
}

/// 磁盘清理的目录，支持 `%VAR%`
pub const TEMP_DIRS: &[&str] = &[
    r"%TEMP%",
    r"%SystemRoot%\Temp",
    r"%SystemRoot%\Prefetch",
    r"%LOCALAPPDATA%\Microsoft\Windows\INetCache",
];

/// 日志清理的 glob 模式，支持 `%VAR%`
pub const LOG_GLOBS: &[&str] = &[
    r"%SystemRoot%\Logs\CBS\*.log",
    r"%SystemRoot%\Logs\DISM\*.log",
    r"%SystemRoot%\Temp\*.log",
    r"%SystemRoot%\Panther\*.log",
    r"%LOCALAPPDATA%\CrashDumps\*.dmp",
];
