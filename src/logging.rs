use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

/// Writes diagnostics to stderr so they never interleave with the session on stdout.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) -> Result<()> {
    log::set_logger(&LOGGER).context("Unable to install logger")?;
    log::set_max_level(level);
    Ok(())
}
