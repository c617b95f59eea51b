//! # Local Repository Trait
//!
//! ローカルファイルシステムの読み込みを抽象化

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::domain::errors::Result;

/// ローカルリポジトリ
#[async_trait]
pub trait LocalRepository: Send + Sync {
    /// ディレクトリ直下のエントリを一貫した順序（ファイル名順）で返す
    async fn list_entries(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// カンマ区切りファイルを行のリストとして読む
    ///
    /// ヘッダー行も通常のデータとして扱う
    async fn read_rows(&self, path: &Path) -> Result<Vec<Vec<String>>>;

    /// ファイルの内容をバイト列で読む
    async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;
}
