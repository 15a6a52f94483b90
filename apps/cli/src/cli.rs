use std::path::PathBuf;
use std::time::Duration;

use bundle_common::{AppConfig, DEFAULT_BUNDLE_DIR};
use clap::Parser;

/// List local support bundles, pick one and upload it to its service request
#[derive(Parser, Debug)]
#[command(name = "send-bundle")]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding the support bundles
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BUNDLE_DIR)]
    pub dir: PathBuf,

    /// Upload timeout in seconds (no timeout when omitted)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the bundle table and exit without prompting
    #[arg(long)]
    pub list: bool,

    /// With --list, print the scan result as JSON
    #[arg(long, requires = "list")]
    pub json: bool,
}

impl Cli {
    /// 命令行参数覆盖环境配置
    pub fn apply(&self, config: AppConfig) -> AppConfig {
        AppConfig {
            bundle_dir: self.dir.clone(),
            request_timeout: self.timeout.map(Duration::from_secs),
            ..config
        }
    }
}
