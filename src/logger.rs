use chrono::Local;
use env_logger::{Builder, Env};
use log::Level;
use std::io::Write;

/// 日志级别环境变量，未设置时回退到 RUST_LOG
pub const LOG_ENV: &str = "SANDESH_WEBS_LOG";

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1b[31m\x1b[1m",
        Level::Warn => "\x1b[33m\x1b[1m",
        Level::Info => "\x1b[32m\x1b[1m",
        Level::Debug => "\x1b[36m\x1b[1m",
        Level::Trace => "\x1b[90m\x1b[1m",
    }
}

pub fn init_logger() {
    let env = Env::default()
        .filter_or(LOG_ENV, std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()));

    // 日志输出到 stderr，stdout 只留给转换结果
    Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            let time = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            writeln!(
                buf,
                "{}{} {}\x1b[0m [{}:{}] {}",
                time,
                level_color(record.level()),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args(),
            )
        })
        .init();
}
