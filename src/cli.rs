use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use log::warn;

use crate::config::AppConfig;
use crate::request::SandeshRequest;
use crate::table::TableOptions;
use crate::trace::{SkippedEntry, TraceEntry, TraceTransformer, TransformReport};

pub const USAGE: &str = "usage:
  sandesh-webs trace [FILE]          convert trace timestamps to local time
  sandesh-webs link <NAME> <VALUE>   print the introspect request link
  sandesh-webs table-options         print the table widget options";

/// 命令行错误类型
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid arguments\n{}", USAGE)]
    Usage,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 执行子命令，trace 未指定文件时从 input 读取
pub fn run<R: BufRead, W: Write>(
    args: &[String],
    config: &AppConfig,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    match args.first().map(String::as_str) {
        Some("trace") => {
            let transformer = TraceTransformer::from_config(&config.trace);
            let report = match args.get(1) {
                Some(path) => convert_lines(&transformer, BufReader::new(File::open(path)?), out)?,
                None => convert_lines(&transformer, input, out)?,
            };
            if !report.is_clean() {
                warn!("{} lines had no valid timestamp", report.skipped.len());
            }
            Ok(())
        }
        Some("link") => match (args.get(1), args.get(2)) {
            (Some(name), Some(value)) => {
                let req = SandeshRequest::new(name.as_str(), value.as_str());
                writeln!(out, "{}", req.with_base(&config.request))?;
                Ok(())
            }
            _ => Err(CliError::Usage),
        },
        Some("table-options") => {
            writeln!(out, "{}", TableOptions::from_config(&config.table).to_json()?)?;
            Ok(())
        }
        _ => Err(CliError::Usage),
    }
}

/// 逐行转换；无效时间戳的行按配置处理后照常输出，行号记在报告里
pub fn convert_lines<R: BufRead, W: Write>(
    transformer: &TraceTransformer,
    reader: R,
    out: &mut W,
) -> Result<TransformReport, CliError> {
    let mut report = TransformReport::default();

    for (index, line) in reader.lines().enumerate() {
        let mut entry = [TraceEntry::new(line?)];
        let line_report = transformer.transform_all(&mut entry);
        report.transformed += line_report.transformed;
        report.skipped.extend(
            line_report
                .skipped
                .into_iter()
                .map(|skipped| SkippedEntry { index, error: skipped.error }),
        );

        let [entry] = entry;
        writeln!(out, "{}", entry.into_content())?;
    }

    Ok(report)
}
