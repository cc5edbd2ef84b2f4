//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// Daily List - single-screen daily task list
#[derive(Debug, Parser)]
#[command(
    name = "dl",
    about = "Single-screen daily task list for the terminal",
    version,
    after_help = "Logs are written to: ~/.local/share/dailylist/logs/dailylist.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Override the task storage directory
    #[arg(long, value_name = "DIR", help = "Override the task storage directory")]
    pub data_dir: Option<PathBuf>,
}

/// Path of the log file the TUI writes to
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dailylist")
        .join("logs")
        .join("dailylist.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["dl"]);
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["dl", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["dl", "-c", "/path/to/config.yml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
    }

    #[test]
    fn test_cli_with_data_dir() {
        let cli = Cli::parse_from(["dl", "--data-dir", "/tmp/tasks"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/tasks")));
    }

    #[test]
    fn test_log_path_ends_with_log_file() {
        assert!(get_log_path().ends_with("dailylist/logs/dailylist.log"));
    }
}
