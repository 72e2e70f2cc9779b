use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use env_logger::{Builder, Target};
use log::{Level, debug, info};
use std::io::{self, Write};

pub const LOG_LEVEL_ENV: &str = "REPO_FLATTEN_LOG_LEVEL";

fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    }
}

/// Logs go to stderr so they never mix with the operator dialogue on stdout.
pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let env = env_logger::Env::default().filter_or(LOG_LEVEL_ENV, default_filter(verbosity));

    Builder::from_env(env)
        .target(Target::Stderr)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let timestamp = buf.timestamp();
            if record.level() >= Level::Debug {
                writeln!(
                    buf,
                    "{style}[{:<5}]{style:#} [{}] {}: {}",
                    record.level(),
                    timestamp,
                    record.target(),
                    record.args()
                )
            } else {
                writeln!(
                    buf,
                    "{style}[{:<5}]{style:#} [{}] {}",
                    record.level(),
                    timestamp,
                    record.args()
                )
            }
        })
        .try_init()
}

pub fn print_welcome_message<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    out.execute(SetForegroundColor(Color::Cyan))?;
    writeln!(out, "📂 Repo Flatten v{}", env!("CARGO_PKG_VERSION"))?;
    out.execute(ResetColor)?;
    writeln!(out, "Snapshot a directory tree and its files into a single text file")?;
    writeln!(out)?;

    debug!("Debug logging enabled");
    info!("Starting Repo Flatten...");
    Ok(())
}
