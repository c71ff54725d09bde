use std::path::PathBuf;

use clap::Parser;

use super::app_config::LogLevel;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "walletkit",
    version,
    about = "A lightweight wallet connection manager for EVM chains",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// JSON-RPC endpoint, overriding the configured chain RPC URL.
    #[arg(long, value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Connector used for a fresh login.
    #[arg(long)]
    pub connector: Option<String>,

    /// Initiate a wallet connection if no session was restored.
    #[arg(long)]
    pub connect: bool,

    /// Clear the persisted session and exit.
    #[arg(long)]
    pub disconnect: bool,
}
