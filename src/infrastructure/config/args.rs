use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "vocarun",
    version,
    about = "A vocabulary trainer screen for the terminal",
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

    /// Width of the wordbook sidebar in terminal columns.
    #[arg(long)]
    pub sidebar_width: Option<u16>,

    /// Animate the sidebar slide.
    #[arg(long)]
    pub enable_animations: Option<bool>,
}
