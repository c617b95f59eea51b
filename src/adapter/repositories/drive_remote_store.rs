//! Google Drive Remote Store Implementation
//!
//! RemoteStoreのGoogle Drive v3実装

use async_trait::async_trait;
use google_drive3 as drive3;
use log::debug;
use mime_guess::mime::{self, Mime};
use std::io::Cursor;

use crate::adapter::auth::service_account::DriveConnector;
use crate::adapter::google::query::{
    child_folder_named_query, children_named_query, first_exact_match,
};
use crate::domain::errors::{Result, UploadError};
use crate::domain::repositories::remote_store::RemoteStore;
use crate::domain::services::content_type::FOLDER_MIME_TYPE;

/// Media type for an upload body, octet-stream when the string does not parse
fn media_type(mime_type: &str) -> Mime {
    mime_type.parse().unwrap_or(mime::APPLICATION_OCTET_STREAM)
}

/// Google Driveリモートストア
pub struct DriveRemoteStore {
    hub: drive3::DriveHub<DriveConnector>,
}

impl DriveRemoteStore {
    /// 新しいリポジトリを作成
    pub fn new(hub: drive3::DriveHub<DriveConnector>) -> Self {
        Self { hub }
    }

    /// メタデータのみのファイルを作成してIDを返す
    ///
    /// create はアップロード経由でしか呼べないので、空の本文を送る
    async fn create_metadata_only(
        &self,
        operation: &str,
        parent_id: &str,
        name: &str,
        mime_type: &str,
    ) -> Result<String> {
        let mut file = drive3::api::File::default();
        file.name = Some(name.to_string());
        file.mime_type = Some(mime_type.to_string());
        file.parents = Some(vec![parent_id.to_string()]);

        let (_resp, created) = self
            .hub
            .files()
            .create(file)
            .supports_all_drives(true)
            .param("fields", "id")
            .upload(Cursor::new(Vec::new()), mime::APPLICATION_OCTET_STREAM)
            .await
            .map_err(|e| UploadError::remote(operation, e))?;

        created
            .id
            .ok_or_else(|| UploadError::remote(operation, "response did not contain a file id"))
    }

    /// クエリに一致する子要素から名前が完全一致する最初のIDを探す（全ページ）
    async fn find_first(&self, query: &str, name: &str) -> Result<Option<String>> {
        let mut page_token: Option<String> = None;

        loop {
            let mut call = self
                .hub
                .files()
                .list()
                .q(query)
                .spaces("drive")
                .supports_all_drives(true)
                .include_items_from_all_drives(true)
                .param("fields", "nextPageToken, files(id, name)");
            if let Some(token) = &page_token {
                call = call.page_token(token);
            }

            let (_resp, list) = call
                .doit()
                .await
                .map_err(|e| UploadError::remote("files.list", e))?;

            let entries = list
                .files
                .unwrap_or_default()
                .into_iter()
                .map(|f| (f.id, f.name));
            if let Some(id) = first_exact_match(entries, name) {
                debug!("File found with ID: {}", id);
                return Ok(Some(id));
            }

            match list.next_page_token {
                Some(token) => page_token = Some(token),
                None => return Ok(None),
            }
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl RemoteStore for DriveRemoteStore {
    async fn find_by_name(&self, parent_id: &str, name: &str) -> Result<Option<String>> {
        self.find_first(&children_named_query(parent_id, name), name)
            .await
    }

    async fn find_folder_by_name(&self, parent_id: &str, name: &str) -> Result<Option<String>> {
        let query = child_folder_named_query(parent_id, name, FOLDER_MIME_TYPE);
        self.find_first(&query, name).await
    }

    async fn create_folder(&self, parent_id: &str, name: &str) -> Result<String> {
        self.create_metadata_only("files.create(folder)", parent_id, name, FOLDER_MIME_TYPE)
            .await
    }

    async fn create_document(
        &self,
        parent_id: &str,
        name: &str,
        mime_type: &str,
    ) -> Result<String> {
        self.create_metadata_only("files.create", parent_id, name, mime_type)
            .await
    }

    async fn upload_media(&self, id: &str, bytes: Vec<u8>, mime_type: &str) -> Result<()> {
        self.hub
            .files()
            .update(drive3::api::File::default(), id)
            .supports_all_drives(true)
            .param("fields", "id")
            .upload(Cursor::new(bytes), media_type(mime_type))
            .await
            .map_err(|e| UploadError::remote("files.update(media)", e))?;

        Ok(())
    }
}
