//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::adapter::auth::{create_drive_hub, create_sheets_hub};
use crate::adapter::config::Config;
use crate::adapter::repositories::drive_remote_store::DriveRemoteStore;
use crate::adapter::repositories::fs_local_repository::FsLocalRepository;
use crate::adapter::repositories::in_memory_workspace::InMemoryWorkspace;
use crate::adapter::repositories::sheets_tabular_service::SheetsTabularService;
use crate::application::dto::upload_summary::UploadSummary;
use crate::application::use_cases::upload_file::UploadFileUseCase;
use crate::domain::entities::file_descriptor::FileDescriptor;
use crate::domain::errors::UploadError;

use super::cli::Args;

/// Map an error chain to the process exit code
pub fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<UploadError>()
        .map(UploadError::exit_code)
        .unwrap_or(1)
}

/// Upload Workflow
pub struct UploadWorkflow {
    config: Config,
}

impl UploadWorkflow {
    /// Create a new workflow instance with the loaded configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the upload workflow
    pub async fn execute(&self, args: Args) -> Result<UploadSummary> {
        info!("Starting upload of {}", args.path);
        info!("Dry run: {}", args.dry_run);

        let root = FileDescriptor::from_path(&args.path, args.name.clone(), Some(args.sheet.clone()));
        if !root.path().exists() {
            return Err(UploadError::local(root.path(), "No such file or directory").into());
        }

        println!("✓ Using configuration:");
        println!("  Folder: {}", self.config.folder_id);
        println!("  Upload: {} as '{}' ({})", args.path, root.name(), root.category());

        let local_repo = Arc::new(FsLocalRepository::new());

        let summary = if args.dry_run {
            let workspace = Arc::new(InMemoryWorkspace::new());
            let use_case = UploadFileUseCase::new(workspace.clone(), workspace.clone(), local_repo);

            let summary = use_case
                .execute(&self.config.folder_id, root)
                .await
                .context("Dry-run upload failed")?;

            println!("✓ Dry-run mode (not actually uploading)");
            println!("  Would create in {}:", self.config.folder_id);
            for line in workspace.render_tree(&self.config.folder_id) {
                println!("    {}", line);
            }
            summary
        } else {
            let key_path = self.config.require_service_account_file()?;
            let drive = create_drive_hub(key_path).await?;
            let sheets = create_sheets_hub(key_path).await?;
            println!("✓ Created Google Drive and Sheets clients");

            let use_case = UploadFileUseCase::new(
                Arc::new(DriveRemoteStore::new(drive)),
                Arc::new(SheetsTabularService::new(sheets)),
                local_repo,
            );

            let summary = use_case
                .execute(&self.config.folder_id, root)
                .await
                .context("Upload failed")?;

            for object in &summary.objects {
                println!("  {} ({}): {}", object.name, object.category, object.web_url());
            }
            summary
        };

        for warning in &summary.warnings {
            println!("⚠ {}", warning);
        }
        println!(
            "✓ Folders: {} created, {} reused | Spreadsheets: {} created, {} updated ({} cells) | Files: {}",
            summary.folders_created,
            summary.folders_reused,
            summary.spreadsheets_created,
            summary.spreadsheets_updated,
            summary.cells_updated,
            summary.files_uploaded
        );
        println!("✓ Upload complete!");

        Ok(summary)
    }
}
