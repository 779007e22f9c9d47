use clap::{Parser, ValueEnum};
use log::LevelFilter;
use tetris_stack_core::consts;
use tetris_stack_core::piece_generator::GeneratorConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Preview queue of upcoming tetromino pieces", long_about = None)]
pub struct StackArgs {
    /// Seed for the shape generator. Omit for a different sequence every run.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(
        long,
        default_value_t = consts::FIRST_PIECE_ID,
        value_parser = clap::value_parser!(u64).range(..=consts::MAX_FIRST_PIECE_ID)
    )]
    pub first_id: u64,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl StackArgs {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            seed: self.seed,
            first_id: self.first_id,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
