//! gpush - Google Drive / Sheets uploader
//!
//! ローカルのファイル・ディレクトリを Google Drive と Google Sheets にアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use gpush::adapter::config::Config;
use gpush::driver::logging::init_logger;
use gpush::driver::{exit_code, Args, UploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn run(args: Args) -> Result<()> {
    // Load configuration before anything touches the remote services
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };

    let workflow = UploadWorkflow::new(config);
    workflow.execute(args).await?;

    Ok(())
}
