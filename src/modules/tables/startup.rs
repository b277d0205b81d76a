use super::DomainTables;
use crate::modules::matcher::{Category, PatternTable};

/// 系统、驱动和安全软件的启动项，永不移除
const PROTECTED: &[(&str, &str)] = &[
    ("SecurityHealth*", "Windows 安全中心"),
    ("Windows Defender*", "Windows Defender"),
    ("WindowsDefender*", "Windows Defender"),
    ("ctfmon", "输入法"),
    ("csrss", "客户端服务器运行时"),
    ("RtkAudUService*", "Realtek 音频"),
    ("RTHDVCPL", "Realtek 音频"),
    ("Realtek*", "Realtek 驱动"),
    ("IgfxTray", "Intel 显卡"),
    ("HotKeysCmds", "Intel 显卡"),
    ("Persistence", "Intel 显卡"),
    ("igfx*", "Intel 显卡"),
    ("NvBackend", "NVIDIA 驱动"),
    ("NVIDIA*", "NVIDIA 驱动"),
    ("AMD*", "AMD 驱动"),
    ("Radeon*", "AMD 驱动"),
    ("SynTPEnh", "Synaptics 触控板"),
    ("ETDCtrl", "ELAN 触控板"),
    ("*Bluetooth*", "蓝牙"),
    ("*Antivirus*", "杀毒软件"),
    ("avast*", "Avast 杀毒"),
    ("AVG*", "AVG 杀毒"),
    ("Kaspersky*", "Kaspersky"),
    ("ESET*", "ESET"),
    ("Malwarebytes*", "Malwarebytes"),
    ("Bitdefender*", "Bitdefender"),
];

/// 确定可以移除的自启动程序
const JUNK: &[(&str, &str)] = &[
    ("Adobe Acrobat Synchronizer", "Adobe Acrobat 同步"),
    ("AdobeAAMUpdater*", "Adobe 更新程序"),
    ("Adobe*Update*", "Adobe 更新程序"),
    ("AdobeGCInvoker*", "Adobe 正版验证"),
    ("CCleaner*", "CCleaner"),
    ("com.squirrel.Teams.Teams", "Microsoft Teams (旧版)"),
    ("Cortana*", "Cortana"),
    ("EpicGamesLauncher", "Epic Games"),
    ("GoogleUpdate*", "Google 更新程序"),
    ("iTunesHelper", "iTunes 助手"),
    ("Java Update Scheduler", "Java 更新程序"),
    ("SunJavaUpdateSched", "Java 更新程序"),
    ("MicrosoftEdgeAutoLaunch*", "Edge 自动启动"),
    ("OneDriveSetup", "OneDrive 安装程序"),
    ("Opera Browser Assistant", "Opera 助手"),
    ("QuickTime Task", "QuickTime"),
    ("Skype*", "Skype"),
    ("CyberLink*", "CyberLink"),
    ("McAfee*Remediation*", "McAfee 残留"),
    ("WavesSvc*", "Waves 音效"),
];

/// 常见软件，移除前询问
const OPTIONAL: &[(&str, &str)] = &[
    ("Discord*", "Discord"),
    ("Spotify*", "Spotify"),
    ("Steam*", "Steam"),
    ("EADM", "EA App"),
    ("EA Desktop*", "EA App"),
    ("Battle.net*", "Battle.net"),
    ("Zoom*", "Zoom"),
    ("Slack*", "Slack"),
    ("OneDrive*", "OneDrive"),
    ("Dropbox*", "Dropbox"),
    ("GoogleDrive*", "Google Drive"),
    ("Teams*", "Microsoft Teams"),
    ("MicrosoftTeams*", "Microsoft Teams"),
    ("Telegram*", "Telegram"),
    ("WhatsApp*", "WhatsApp"),
    ("uTorrent*", "uTorrent"),
    ("qBittorrent*", "qBittorrent"),
    ("Logitech*", "Logitech"),
    ("LGHUB*", "Logitech G HUB"),
    ("Razer*", "Razer Synapse"),
    ("Corsair*", "Corsair iCUE"),
];

pub fn default_tables() -> DomainTables {
    DomainTables {
        protected: PatternTable::builtin(Category::Protected, PROTECTED),
        junk: PatternTable::builtin(Category::Junk, JUNK),
        optional: PatternTable::builtin(Category::Optional, OPTIONAL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_compile_completely() {
        let tables = default_tables();
        assert_eq!(tables.protected.len(), PROTECTED.len());
        assert_eq!(tables.junk.len(), JUNK.len());
        assert_eq!(tables.optional.len(), OPTIONAL.len());
    }

    #[test]
    fn no_builtin_junk_or_optional_pattern_is_shadowed_by_protected() {
        let tables = default_tables();
        for entry in tables.junk.entries().chain(tables.optional.entries()) {
            let literal = entry.pattern.replace('*', "");
            assert!(
                !tables.protected.is_match(&literal),
                "{} 被白名单遮蔽，永远不会生效",
                entry.pattern
            );
        }
    }
}
