//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::services::CueKind;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomo-clock")]
#[command(about = "A 25 + 5 session/break countdown clock served over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20525")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Milliseconds between countdown ticks
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Sound played when the clock switches between session and break
    #[arg(long, value_enum, default_value = "bell")]
    pub cue: CueKind,

    /// Player command for `--cue command`, e.g. "paplay /path/to/beep.wav"
    #[arg(long)]
    pub cue_command: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Nominal interval between ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
