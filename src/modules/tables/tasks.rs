use crate::modules::matcher::{Category, PatternTable};

/// 禁用关联计划任务时必须跳过的任务，同时匹配任务名和完整路径
const PROTECTED_TASKS: &[(&str, &str)] = &[
    (r"\Microsoft\Windows\*", "系统任务"),
    (r"\Microsoft\Office\*", "Office 维护"),
    ("*backup*", "备份"),
    ("*update*", "更新"),
    ("*security*", "安全"),
    ("*defender*", "Windows Defender"),
    ("*antimalware*", "反恶意软件"),
    ("*antivirus*", "杀毒软件"),
    ("*driver*", "驱动"),
    ("*restore*", "系统还原"),
    ("*license*", "许可证"),
];

pub fn default_protected_tasks() -> PatternTable {
    PatternTable::builtin(Category::Protected, PROTECTED_TASKS)
}
