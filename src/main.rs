use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use dbglog::{dbg_print, LogConfig, LogContext, LogLevel};

#[derive(Parser)]
#[command(name = "dbglog", about = "Emit messages through the dbglog console and file sinks")]
struct Cli {
    /// TOML file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Console threshold (error, warning, info, debug, none, log or 0-5).
    #[arg(long, value_parser = parse_level)]
    threshold: Option<LogLevel>,

    /// Level every message is emitted at. `log` sends it to the file sink.
    #[arg(long, value_parser = parse_level, default_value = "info")]
    level: LogLevel,

    /// Write debug logs to /tmp/dbglog-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Messages to emit. Read from stdin, one per line, when none are given.
    messages: Vec<String>,
}

fn parse_level(input: &str) -> Result<LogLevel, String> {
    input.parse().map_err(|err: dbglog::Error| err.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/dbglog-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("dbglog debug log started, tail -f /tmp/dbglog-debug.log");
    }

    let config = LogConfig::load(cli.config.as_deref())?;
    let ctx = Arc::new(LogContext::from_config(&config.logging));
    if let Some(threshold) = cli.threshold {
        ctx.set_threshold(threshold);
    }
    tracing::debug!(threshold = %ctx.threshold(), path = %ctx.file_path().display(), "context ready");

    let _sink = ctx.scoped();
    if cli.messages.is_empty() {
        for line in std::io::stdin().lock().lines() {
            dbg_print!(ctx, cli.level, "{}", line?);
        }
    } else {
        for message in &cli.messages {
            dbg_print!(ctx, cli.level, "{message}");
        }
    }
    Ok(())
}
