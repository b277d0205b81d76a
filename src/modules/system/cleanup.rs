//! 临时文件与日志清理
//!
//! 正在使用的文件删除失败只计数，不中断清理。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::modules::common::error::TuneError;
use crate::modules::common::utils;

/// 环境变量未定义时使用的系统目录
const FALLBACK_SYSTEM_ROOT: &str = r"C:\Windows";
const FALLBACK_PROGRAM_FILES: &str = r"C:\Program Files";
const FALLBACK_PROGRAM_FILES_X86: &str = r"C:\Program Files (x86)";

/// 系统目录下禁止整体清空的子目录
const SYSTEM_SUBDIRS: &[&str] = &["System32", "SysWOW64", "WinSxS"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupReport {
    pub files_removed: usize,
    pub bytes_freed: u64,
    pub failures: usize,
}

impl CleanupReport {
    fn merge(&mut self, other: CleanupReport) {
        self.files_removed += other.files_removed;
        self.bytes_freed += other.bytes_freed;
        self.failures += other.failures;
    }
}

/// 目录本身是否为关键目录 (只比较完整路径，不比较前缀)
///
/// 比较前先解析 `.` 和 `..`，目录存在时再比较解析符号链接后的真实路径。
/// 任何盘符根目录都视为关键目录。
pub fn is_critical_dir(path: &Path) -> bool {
    let mut candidates = vec![normalize_path(&path.to_string_lossy())];
    if let Ok(real) = dunce::canonicalize(path) {
        candidates.push(normalize_path(&real.to_string_lossy()));
    }

    let critical: Vec<NormalizedPath> = critical_dirs()
        .iter()
        .map(|dir| normalize_path(&dir.to_string_lossy()))
        .collect();

    candidates
        .iter()
        .any(|candidate| candidate.is_root() || critical.contains(candidate))
}

fn critical_dirs() -> Vec<PathBuf> {
    let env_or = |name: &str, fallback: &str| {
        std::env::var_os(name)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(fallback))
    };

    let system_root = env_or("SystemRoot", FALLBACK_SYSTEM_ROOT);
    let mut critical = vec![
        env_or("ProgramFiles", FALLBACK_PROGRAM_FILES),
        env_or("ProgramFiles(x86)", FALLBACK_PROGRAM_FILES_X86),
    ];
    critical.extend(SYSTEM_SUBDIRS.iter().map(|sub| system_root.join(sub)));
    critical.push(system_root);

    // 用户目录及其上级 (Users 或 /home)
    if let Some(home) = dirs::home_dir() {
        if let Some(parent) = home.parent() {
            critical.push(parent.to_path_buf());
        }
        critical.push(home);
    }

    critical
}

/// 按 Windows 规则归一化的路径: 盘符/根前缀 + 各级目录 (大写)
#[derive(Debug, PartialEq, Eq)]
struct NormalizedPath {
    prefix: String,
    components: Vec<String>,
}

impl NormalizedPath {
    /// 盘符根、`/`，以及 `.`、空路径这类解析后没有任何目录层级的路径
    fn is_root(&self) -> bool {
        self.components.is_empty()
    }
}

/// 只做字面解析，不访问文件系统；`/` 与 `\` 同等看待
fn normalize_path(raw: &str) -> NormalizedPath {
    let unified = raw.replace('/', "\\");
    let unified = unified.strip_prefix(r"\\?\").unwrap_or(&unified);

    let (prefix, rest) = match unified.char_indices().nth(1) {
        Some((index, ':')) => unified.split_at(index + 1),
        _ => ("", unified),
    };

    let mut components: Vec<String> = Vec::new();
    for part in rest.split('\\') {
        match part {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            other => components.push(other.to_uppercase()),
        }
    }

    NormalizedPath {
        prefix: prefix.to_uppercase(),
        components,
    }
}

/// 删除目录下的所有内容，保留目录本身
pub fn clean_directory_contents(dir: &Path) -> Result<CleanupReport, TuneError> {
    if is_critical_dir(dir) {
        return Err(TuneError::ProtectedItem(format!("拒绝清空关键目录 {}", dir.display())));
    }

    let mut report = CleanupReport::default();
    if !dir.is_dir() {
        tracing::debug!("目录不存在，跳过: {}", dir.display());
        return Ok(report);
    }

    // 先删文件再删目录
    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .contents_first(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if entry.file_type().is_dir() {
            // 目录中还有被占用的文件时会失败，忽略即可
            let _ = std::fs::remove_dir(path);
            continue;
        }

        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        match std::fs::remove_file(path) {
            Ok(_) => {
                report.files_removed += 1;
                report.bytes_freed += size;
            }
            Err(e) => {
                tracing::debug!("无法删除 {}: {}", path.display(), e);
                report.failures += 1;
            }
        }
    }

    tracing::info!(
        "已清理 {}: {} 个文件, {}",
        dir.display(),
        report.files_removed,
        utils::format_size(report.bytes_freed)
    );
    Ok(report)
}

/// 清理一组临时目录，目录写法支持 `%VAR%`
pub fn clean_temp_dirs(dirs: &[String]) -> Result<CleanupReport, TuneError> {
    let mut total = CleanupReport::default();

    for dir in dirs {
        let expanded = PathBuf::from(utils::expand_env_vars(dir));
        match clean_directory_contents(&expanded) {
            Ok(report) => total.merge(report),
            Err(e) => {
                tracing::warn!("跳过 {}: {}", expanded.display(), e);
                total.failures += 1;
            }
        }
    }

    Ok(total)
}

/// 删除匹配 glob 模式的文件
pub fn clean_log_globs(patterns: &[String]) -> Result<CleanupReport, TuneError> {
    let mut report = CleanupReport::default();

    for pattern in patterns {
        let expanded = utils::expand_env_vars(pattern);
        let paths = match glob::glob(&expanded) {
            Ok(paths) => paths,
            Err(e) => {
                let err = TuneError::Pattern(format!("{}: {}", expanded, e));
                tracing::warn!("跳过日志模式: {}", err);
                report.failures += 1;
                continue;
            }
        };

        for path in paths.filter_map(|p| p.ok()).filter(|p| p.is_file()) {
            let size = path.metadata().map(|m| m.len()).unwrap_or(0);
            match std::fs::remove_file(&path) {
                Ok(_) => {
                    report.files_removed += 1;
                    report.bytes_freed += size;
                }
                Err(e) => {
                    tracing::debug!("无法删除日志 {}: {}", path.display(), e);
                    report.failures += 1;
                }
            }
        }
    }

    tracing::info!(
        "日志清理: {} 个文件, {}",
        report.files_removed,
        utils::format_size(report.bytes_freed)
    );
    Ok(report)
}
