use std::io::{self, BufRead, Write};

use bundle_common::{Result, SendBundleError};

/// 终端交互：普通输入与不回显的密码输入
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> Result<String>;
    fn read_password(&mut self, prompt: &str) -> Result<String>;
}

/// 标准输入 + rpassword（从控制终端读取，不回显）
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(SendBundleError::Prompt("input closed".to_string()));
        }
        Ok(line.trim().to_string())
    }

    fn read_password(&mut self, prompt: &str) -> Result<String> {
        rpassword::prompt_password(prompt)
            .map_err(|e| SendBundleError::Prompt(format!("cannot read password: {}", e)))
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// 按顺序回放预设答案，并记录每次提示；答案用完视为输入结束
    #[derive(Default)]
    pub struct ScriptedPrompter {
        pub lines: VecDeque<String>,
        pub password: Option<String>,
        pub prompts: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(lines: &[&str], password: Option<&str>) -> Self {
            Self {
                lines: lines.iter().map(|s| s.to_string()).collect(),
                password: password.map(str::to_string),
                prompts: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn read_line(&mut self, prompt: &str) -> Result<String> {
            self.prompts.push(prompt.to_string());
            self.lines
                .pop_front()
                .ok_or_else(|| SendBundleError::Prompt("input closed".into()))
        }

        fn read_password(&mut self, prompt: &str) -> Result<String> {
            self.prompts.push(prompt.to_string());
            self.password
                .take()
                .ok_or_else(|| SendBundleError::Prompt("no tty".into()))
        }
    }
}
