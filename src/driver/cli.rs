//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::domain::entities::file_descriptor::DEFAULT_SHEET_NAME;

/// ファイル/ディレクトリを Google Drive と Google Sheets にアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "gpush")]
#[command(about = "Upload files and directories to Google Drive and Google Sheets", long_about = None)]
pub struct Args {
    /// Path to the file or directory to be uploaded
    pub path: String,

    /// Name of the uploaded file (defaults to the file name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Sheet (tab) that CSV data is written to
    #[arg(short, long, default_value = DEFAULT_SHEET_NAME)]
    pub sheet: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Dry run mode - upload into an in-memory workspace and print the result
    #[arg(long)]
    pub dry_run: bool,

    /// Optional JSON config file (environment variables take precedence)
    #[arg(short, long)]
    pub config: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["gpush", "data.csv"]);
        assert_eq!(args.path, "data.csv");
        assert_eq!(args.sheet, "Sheet1");
        assert!(args.name.is_none());
        assert!(!args.verbose);
        assert!(!args.dry_run);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["gpush", "data.csv", "-n", "Report", "-s", "Q1", "-v"]);
        assert_eq!(args.name.as_deref(), Some("Report"));
        assert_eq!(args.sheet, "Q1");
        assert!(args.verbose);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "gpush",
            "photos",
            "--name",
            "Holiday",
            "--sheet",
            "Tab",
            "--dry-run",
            "--config",
            "/etc/gpush.json",
        ]);
        assert_eq!(args.path, "photos");
        assert_eq!(args.name.as_deref(), Some("Holiday"));
        assert!(args.dry_run);
        assert_eq!(args.config.as_deref(), Some("/etc/gpush.json"));
    }

    #[test]
    fn test_args_path_required() {
        assert!(Args::try_parse_from(["gpush"]).is_err());
    }
}
