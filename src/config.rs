//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::types::FRAME_IDLE_MS;

#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
pub struct Config {
    #[arg(long, env = "TETRIS_SEED", help = "Seed for the piece randomizer")]
    pub seed: Option<u64>,

    #[arg(
        long,
        env = "TETRIS_LOG_FILE",
        help = "Write logs to this file (the terminal is used by the game)"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)"
    )]
    pub verbose: u8,

    #[arg(
        long,
        env = "TETRIS_FRAME_MS",
        default_value_t = FRAME_IDLE_MS,
        help = "Idle sleep between frames in milliseconds (1-100)"
    )]
    pub frame_ms: u64,
}

impl Config {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.clamp(1, 100))
    }
}
