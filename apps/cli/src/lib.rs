pub mod cli;
pub mod commands;
pub mod prompt;

use std::io::{self, Write};
use std::process::ExitCode;

use bundle_common::{init_logging, AppConfig, Result, SendBundleError};
use bundle_domain::Selection;
use bundle_scanner::list_bundles;
use bundle_uploader::{perform_upload, HttpTransport, Transport};

use cli::Cli;
use commands::details::get_upload_details;
use commands::list::print_listing;
use commands::select::prompt_for_support_bundle;
use prompt::{Prompter, TerminalPrompter};

/// 扫描或配置出错时的退出码
const EXIT_FAILURE: u8 = 2;

pub fn run(cli: Cli) -> ExitCode {
    init_logging();
    let config = cli.apply(AppConfig::from_env());
    log::debug!("config: {:?}", config);

    let mut stdout = io::stdout();
    let result = if cli.list {
        list_bundles(&config.bundle_dir)
            .and_then(|bundles| print_listing(&bundles, cli.json, &mut stdout))
            .map(|_| 0)
    } else {
        let transport = HttpTransport::new(&config);
        send_bundle(&config, &mut TerminalPrompter, &transport, &mut stdout)
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            let _ = stdout.flush();
            eprintln!("error: {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// 扫描 → 选择 → 补齐信息 → 上传，返回进程退出码。
///
/// 放弃选择、目录为空、输入中断都返回 0；上传只有 200 返回 0。
pub fn send_bundle<P, T, W>(config: &AppConfig, prompter: &mut P, transport: &T, out: &mut W) -> Result<u8>
where
    P: Prompter + ?Sized,
    T: Transport + ?Sized,
    W: Write,
{
    let bundles = list_bundles(&config.bundle_dir)?;
    if bundles.is_empty() {
        writeln!(
            out,
            "No support bundles found in {}. Generate some support bundles first then run this command again.",
            config.bundle_dir.display()
        )?;
        return Ok(0);
    }

    let entry = match prompt_for_support_bundle(&bundles, prompter, out) {
        Selection::Selected(entry) => entry,
        Selection::Aborted => return Ok(0),
    };

    let request = match get_upload_details(&entry, prompter, out) {
        Ok(request) => request,
        Err(SendBundleError::Prompt(reason)) => {
            writeln!(out)?;
            writeln!(out, "Aborted ({}).", reason)?;
            return Ok(0);
        }
        Err(e) => return Err(e),
    };

    let outcome = perform_upload(&request, config, transport, out);
    if !outcome.is_success() {
        log::warn!("upload of {} did not succeed: {:?}", request.bundle_file_name, outcome);
    }
    Ok(outcome.exit_code())
}
