//! # Remote Store Trait
//!
//! リモートのファイル階層（フォルダ・ドキュメント）へのアクセスを抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::Result;

/// リモートストア
///
/// オブジェクトは作成時にストアが割り当てる不透明なIDで識別される。
/// 同じ親の中で名前が一意である保証はない。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// 親コンテナ内で名前が完全一致する最初のオブジェクトのIDを返す
    ///
    /// # Errors
    ///
    /// リモート呼び出しに失敗した場合に `UploadError::RemoteAccess` を返す
    async fn find_by_name(&self, parent_id: &str, name: &str) -> Result<Option<String>>;

    /// 親コンテナ内で名前が完全一致する最初のフォルダのIDを返す
    ///
    /// 同名の通常ファイルやドキュメントは対象外
    async fn find_folder_by_name(&self, parent_id: &str, name: &str) -> Result<Option<String>>;

    /// フォルダを作成してIDを返す
    async fn create_folder(&self, parent_id: &str, name: &str) -> Result<String>;

    /// 空のドキュメントを作成してIDを返す
    async fn create_document(&self, parent_id: &str, name: &str, mime_type: &str)
        -> Result<String>;

    /// 既存オブジェクトの内容をアップロードする
    async fn upload_media(&self, id: &str, bytes: Vec<u8>, mime_type: &str) -> Result<()>;
}
