//! Command-line arguments.

use clap::{Parser, Subcommand};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

#[derive(Debug, Parser)]
#[command(
    name = "counter-view",
    version,
    about = "A counter whose next value comes from an HTTP endpoint"
)]
pub struct Cli {
    /// Endpoint answering `?number=<n>` with `{"result": <integer>}`
    #[arg(long, env = "COUNTER_VIEW_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds (0 disables the timeout)
    #[arg(long, env = "COUNTER_VIEW_TIMEOUT_SECS", default_value_t = 0)]
    pub timeout_secs: u64,

    /// Draw in the normal screen buffer and leave the mouse alone
    #[arg(long)]
    pub inline: bool,

    /// Disable colors and emphasis
    #[arg(long)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Click the button without a terminal UI and print the result
    Click {
        /// Number of sequential clicks
        #[arg(long, short = 'n', default_value_t = 1)]
        times: u32,
    },
}
