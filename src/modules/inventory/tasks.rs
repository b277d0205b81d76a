use super::models::ScheduledTask;
use crate::modules::common::error::TuneError;
use crate::modules::system::shell;

/// 列出所有计划任务
pub fn list_scheduled_tasks() -> Result<Vec<ScheduledTask>, TuneError> {
    if !cfg!(windows) {
        return Err(TuneError::Unsupported("计划任务列表需要 Windows".to_string()));
    }

    let csv = shell::run_command("schtasks", &["/query", "/fo", "csv", "/nh"])
        .map_err(|e| TuneError::ScheduledTask(format!("查询计划任务失败: {}", e)))?;

    Ok(parse_schtasks_csv(&csv))
}

/// 解析 `schtasks /query /fo csv /nh` 的输出
///
/// 每个文件夹会重复输出表头，同一任务的多个触发器会重复出现，这里一并去重。
pub fn parse_schtasks_csv(output: &str) -> Vec<ScheduledTask> {
    let mut seen = std::collections::HashSet::new();
    let mut tasks = Vec::new();

    for line in output.lines() {
        let fields = split_csv_line(line.trim());
        if fields.len() < 3 {
            continue;
        }

        let path = fields[0].trim();
        if !path.starts_with('\\') {
            // 表头或本地化的 "文件夹:" 行
            continue;
        }

        if seen.insert(path.to_lowercase()) {
            tasks.push(ScheduledTask::from_path(path, fields[2].trim()));
        }
    }

    tasks
}

fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    if !line.is_empty() {
        fields.push(current);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_schtasks_csv_extracts_path_name_and_state() {
        let output = "\"\\OneDrive Standalone Update Task-S-1-5-21\",\"2026/10/19 10:00:00\",\"Ready\"\r\n\
                      \"\\Microsoft\\Windows\\Defrag\\ScheduledDefrag\",\"N/A\",\"Disabled\"\r\n";

        let tasks = parse_schtasks_csv(output);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name, "OneDrive Standalone Update Task-S-1-5-21");
        assert_eq!(tasks[0].state, "Ready");
        assert_eq!(tasks[1].path, r"\Microsoft\Windows\Defrag\ScheduledDefrag");
        assert_eq!(tasks[1].name, "ScheduledDefrag");
        assert!(tasks[1].is_disabled());
    }

    #[test]
    fn parse_schtasks_csv_skips_headers_and_duplicates() {
        let output = "\"TaskName\",\"Next Run Time\",\"Status\"\n\
                      \"\\Spotify\",\"N/A\",\"Ready\"\n\
                      \n\
                      \"\\Spotify\",\"N/A\",\"Ready\"\n";

        let tasks = parse_schtasks_csv(output);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Spotify");
    }

    #[test]
    fn split_csv_line_handles_embedded_commas_and_quotes() {
        let fields = split_csv_line(r#""\Vendor, Inc\Task","say ""hi""",Ready"#);
        assert_eq!(
            fields,
            vec![
                r"\Vendor, Inc\Task".to_string(),
                r#"say "hi""#.to_string(),
                "Ready".to_string()
            ]
        );
    }
}
