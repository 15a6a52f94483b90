//! 支持包表格与编号选择。

use std::io::Write;

use bundle_domain::{BundleEntry, Selection};

use crate::prompt::Prompter;

const NAME_WIDTH: usize = 64;
const DATE_OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const SIZE_SCALE: u64 = 1000;

/// 逐级整除 1000，取使数值小于 1000 的最大单位；不四舍五入，最大到 TB
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes;
    let mut unit = 0;
    while value >= SIZE_SCALE && unit < SIZE_UNITS.len() - 1 {
        value /= SIZE_SCALE;
        unit += 1;
    }
    format!("{} {}", group_thousands(value), SIZE_UNITS[unit])
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn fit_name(name: &str) -> String {
    name.chars().take(NAME_WIDTH).collect()
}

pub fn render_table<W: Write>(bundles: &[BundleEntry], out: &mut W) {
    let _ = writeln!(
        out,
        "{:>2}   {:<64}   {:>8}   {:<20}   {:<13}",
        "#", "Filename", "Size", "Timestamp", "SR #"
    );
    for (i, entry) in bundles.iter().enumerate() {
        let index = if entry.is_dir {
            "--".to_string()
        } else {
            format!("{:02}", i + 1)
        };
        let size = if entry.is_dir {
            "<DIR>".to_string()
        } else {
            format_size(u64::try_from(entry.size_bytes).unwrap_or(0))
        };
        let timestamp = entry
            .embedded_timestamp
            .map(|t| t.format(DATE_OUTPUT_FORMAT).to_string())
            .unwrap_or_default();
        let sr = entry.embedded_service_request_id.as_deref().unwrap_or("");
        let _ = writeln!(
            out,
            "{:<2} : {:<64} : {:>8} : {:<20} : {:<13}",
            index,
            fit_name(&entry.name),
            size,
            timestamp,
            sr
        );
    }
}

/// 解析用户输入的编号（1 起）；0、非数字、越界、目录都视为放弃
fn choose(bundles: &[BundleEntry], answer: &str) -> Selection {
    let Ok(number) = answer.trim().parse::<usize>() else {
        return Selection::Aborted;
    };
    match number.checked_sub(1).and_then(|i| bundles.get(i)) {
        Some(entry) if entry.is_selectable() => Selection::Selected(entry.clone()),
        _ => Selection::Aborted,
    }
}

/// 渲染表格并读取编号。任何无效输入（包括输入结束）都返回 `Aborted`，不会报错。
pub fn prompt_for_support_bundle<P, W>(bundles: &[BundleEntry], prompter: &mut P, out: &mut W) -> Selection
where
    P: Prompter + ?Sized,
    W: Write,
{
    if bundles.is_empty() {
        return Selection::Aborted;
    }
    render_table(bundles, out);
    let _ = out.flush();

    let prompt = format!("Enter support bundle #: (1 - {}, 0 to exit): ", bundles.len());
    match prompter.read_line(&prompt) {
        Ok(answer) => {
            let selection = choose(bundles, &answer);
            if selection == Selection::Aborted {
                log::debug!("no bundle selected for input {:?}", answer.trim());
            }
            selection
        }
        Err(e) => {
            log::debug!("selection prompt closed: {}", e);
            Selection::Aborted
        }
    }
}
