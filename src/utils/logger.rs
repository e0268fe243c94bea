use std::io::Write;

use chrono::Utc;
use log::info;

/// Initialise the process-wide logger.
///
/// `RUST_LOG` wins when set; otherwise `level` (from `LOG_LEVEL`) is the filter.
/// Calling this twice is harmless: the second call only reports an error.
pub fn init(level: &str) -> Result<(), log::SetLoggerError> {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}:{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()?;

    info!("Calculator logger initialized");
    Ok(())
}
