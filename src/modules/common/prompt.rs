//! 交互确认
//!
//! 业务逻辑只通过 [`Confirm`] 询问用户，不直接读写控制台，
//! 因此 "一键维护" 之类的非交互场景可以传入 [`AutoConfirm`]。

use std::collections::HashSet;
use std::io::{BufRead, Write};

/// 是/否确认回调
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// 固定回答，用于 `--yes` 和自动模式
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        tracing::debug!("自动回答 {}: {}", if self.0 { "Y" } else { "N" }, prompt);
        self.0
    }
}

/// 预先给定的答案集合: 提示文本包含集合中任一关键字即回答 true
#[derive(Debug, Clone, Default)]
pub struct PresetConfirm {
    accepted: HashSet<String>,
}

impl PresetConfirm {
    pub fn new<I, S>(accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            accepted: accepted
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Confirm for PresetConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let prompt = prompt.to_lowercase();
        self.accepted.iter().any(|key| prompt.contains(key.as_str()))
    }
}

/// 控制台 Y/N 提示
pub struct ConsoleConfirm<R, W> {
    input: R,
    output: W,
}

impl ConsoleConfirm<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self {
            input: std::io::stdin().lock(),
            output: std::io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> ConsoleConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for ConsoleConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        loop {
            let _ = write!(self.output, "{} (Y/N): ", prompt);
            let _ = self.output.flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                // 输入流结束时按 "否" 处理，避免阻塞
                Ok(0) | Err(_) => return false,
                Ok(_) => {}
            }

            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => {
                    let _ = writeln!(self.output, "请输入 Y 或 N");
                }
            }
        }
    }
}
