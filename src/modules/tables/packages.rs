use super::DomainTables;
use crate::modules::matcher::{Category, PatternTable};

/// 系统组件与常用工具
const PROTECTED: &[(&str, &str)] = &[
    ("Microsoft.WindowsStore", "Microsoft Store"),
    ("Microsoft.StorePurchaseApp", "Store 购买组件"),
    ("Microsoft.DesktopAppInstaller", "App Installer (winget)"),
    ("Microsoft.SecHealthUI", "Windows 安全中心"),
    ("Microsoft.WindowsCalculator", "计算器"),
    ("Microsoft.WindowsNotepad", "记事本"),
    ("Microsoft.WindowsTerminal", "Windows 终端"),
    ("Microsoft.Windows.Photos", "照片"),
    ("Microsoft.Paint", "画图"),
    ("Microsoft.ScreenSketch", "截图工具"),
    ("Microsoft.HEIFImageExtension", "HEIF 图像扩展"),
    ("Microsoft.WebpImageExtension", "WebP 图像扩展"),
    ("Microsoft.VP9VideoExtensions", "VP9 视频扩展"),
    ("Microsoft.HEVCVideoExtension", "HEVC 视频扩展"),
    ("Microsoft.VCLibs*", "VC 运行库"),
    ("Microsoft.NET*", ".NET 运行库"),
    ("Microsoft.UI.Xaml*", "WinUI 运行库"),
    ("Microsoft.Windows.ShellExperienceHost", "Shell"),
    ("Microsoft.Windows.StartMenuExperienceHost", "开始菜单"),
    ("Microsoft.AAD.BrokerPlugin", "账户代理"),
    ("Microsoft.AccountsControl", "账户控制"),
    ("*NVIDIA*", "NVIDIA 控制面板"),
    ("*Realtek*", "Realtek 音频控制台"),
    ("*Intel*Graphics*", "Intel 显卡控制中心"),
    ("AdvancedMicroDevices*", "AMD 软件"),
];

/// 预装的推广应用
const JUNK: &[(&str, &str)] = &[
    ("Microsoft.BingNews", "资讯"),
    ("Microsoft.BingWeather", "天气"),
    ("Microsoft.BingSearch", "Bing 搜索"),
    ("Microsoft.GetHelp", "获取帮助"),
    ("Microsoft.Getstarted", "使用技巧"),
    ("Microsoft.MicrosoftSolitaireCollection", "纸牌游戏"),
    ("Microsoft.MicrosoftOfficeHub", "Office 推广"),
    ("Microsoft.MixedReality.Portal", "混合现实门户"),
    ("Microsoft.People", "人脉"),
    ("Microsoft.WindowsFeedbackHub", "反馈中心"),
    ("Microsoft.Microsoft3DViewer", "3D 查看器"),
    ("Microsoft.Print3D", "Print 3D"),
    ("Microsoft.549981C3F5F10", "Cortana"),
    ("Clipchamp.Clipchamp", "Clipchamp"),
    ("*CandyCrush*", "Candy Crush"),
    ("king.com.*", "King 游戏"),
    ("*Disney*", "Disney+"),
    ("*Facebook*", "Facebook"),
    ("*Twitter*", "Twitter"),
    ("*TikTok*", "TikTok"),
    ("*Netflix*", "Netflix"),
    ("*McAfee*", "McAfee 试用版"),
    ("*Norton*", "Norton 试用版"),
];

/// 部分用户会用到的微软应用
const OPTIONAL: &[(&str, &str)] = &[
    ("Microsoft.XboxApp", "Xbox"),
    ("Microsoft.GamingApp", "Xbox"),
    ("Microsoft.XboxGamingOverlay", "Xbox Game Bar"),
    ("Microsoft.Xbox*", "Xbox 组件"),
    ("Microsoft.YourPhone", "手机连接"),
    ("Microsoft.WindowsMaps", "地图"),
    ("Microsoft.WindowsAlarms", "闹钟和时钟"),
    ("Microsoft.WindowsSoundRecorder", "录音机"),
    ("Microsoft.WindowsCamera", "相机"),
    ("Microsoft.ZuneMusic", "媒体播放器"),
    ("Microsoft.ZuneVideo", "电影和电视"),
    ("Microsoft.Todos", "Microsoft To Do"),
    ("Microsoft.PowerAutomateDesktop", "Power Automate"),
    ("Microsoft.OutlookForWindows", "新版 Outlook"),
    ("microsoft.windowscommunicationsapps", "邮件和日历"),
    ("Microsoft.Office.OneNote", "OneNote"),
    ("Microsoft.SkypeApp", "Skype"),
    ("MicrosoftTeams", "Microsoft Teams"),
    ("MSTeams", "Microsoft Teams"),
    ("Microsoft.MicrosoftStickyNotes", "便笺"),
    ("SpotifyAB.SpotifyMusic", "Spotify"),
];

pub fn default_tables() -> DomainTables {
    DomainTables {
        protected: PatternTable::builtin(Category::Protected, PROTECTED),
        junk: PatternTable::builtin(Category::Junk, JUNK),
        optional: PatternTable::builtin(Category::Optional, OPTIONAL),
    }
}
