//! 日志初始化与作用域计时器。
//!
//! 日志走 stderr（env_logger），默认 `warn`，可用 `RUST_LOG` 覆盖；
//! 这样诊断输出不会混进 stdout 上的表格。

use std::io::Write;
use std::time::{Duration, Instant};

/// 初始化 env_logger，重复调用无副作用
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

/// 作用域计时器：创建时记录起点，`finish` 时把耗时写到给定输出。
///
/// 若未调用 `finish` 就被 drop（如展开时），耗时改为打印到 stdout，保证只输出一次。
pub struct UploadTimer {
    label: &'static str,
    start: Instant,
    reported: bool,
}

impl UploadTimer {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
            reported: false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish<W: Write>(mut self, out: &mut W) {
        let elapsed = self.elapsed();
        log::debug!("{} took {:?}", self.label, elapsed);
        let _ = writeln!(out, "{}", format_elapsed(self.label, elapsed));
        self.reported = true;
    }
}

impl Drop for UploadTimer {
    fn drop(&mut self) {
        if !self.reported {
            println!("{}", format_elapsed(self.label, self.elapsed()));
        }
    }
}

/// `  ... {label} : MM minutes S.ss seconds`
pub fn format_elapsed(label: &str, elapsed: Duration) -> String {
    let total = elapsed.as_secs_f64();
    let minutes = (total / 60.0).floor();
    let seconds = total - minutes * 60.0;
    format!("  ... {} : {:02.0} minutes {:02.2} seconds", label, minutes, seconds)
}
