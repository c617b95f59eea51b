//! Filesystem Local Repository Implementation
//!
//! LocalRepositoryのファイルシステム実装

use async_trait::async_trait;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::errors::{Result, UploadError};
use crate::domain::repositories::local_repository::LocalRepository;

/// ファイルシステムベースのローカルリポジトリ
pub struct FsLocalRepository;

impl FsLocalRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ディレクトリ直下のエントリをファイル名順に列挙する（同期処理）
    ///
    /// シンボリックリンク経由のディレクトリは辿らない
    fn list_entries_sync(dir: &Path) -> Result<Vec<PathBuf>> {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(e) if e.path_is_symlink() && e.path().is_dir() => {
                    warn!("Skipping symlinked directory {}", e.path().display());
                    None
                }
                Ok(e) => Some(Ok(e.into_path())),
                Err(e) => Some(Err(UploadError::local(dir, e))),
            })
            .collect()
    }

    /// CSVを読み込む（同期処理）
    ///
    /// ヘッダーは特別扱いせず、列数の異なる行も許容する。
    /// 空行は空の行として残し、後続の行の位置をずらさない。
    fn read_rows_sync(path: &Path) -> Result<Vec<Vec<String>>> {
        let text = fs::read_to_string(path).map_err(|e| UploadError::local(path, e))?;

        split_records(&text)
            .into_iter()
            .map(|line| {
                let line = line.strip_suffix('\r').unwrap_or(line);
                if line.is_empty() {
                    Ok(Vec::new())
                } else {
                    parse_record(path, line)
                }
            })
            .collect()
    }
}

/// 引用符の外にある改行でテキストをレコード単位に分ける
///
/// 引用符はフィールド先頭でのみ開き、引用符内の `""` はエスケープ
fn split_records(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut records = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' if in_quotes => {
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    in_quotes = false;
                }
            }
            b'"' if field_start => {
                in_quotes = true;
                field_start = false;
            }
            b',' if !in_quotes => field_start = true,
            b'\n' if !in_quotes => {
                records.push(&text[start..i]);
                start = i + 1;
                field_start = true;
            }
            _ if !in_quotes => field_start = false,
            _ => {}
        }
        i += 1;
    }

    if start < text.len() {
        records.push(&text[start..]);
    }
    records
}

/// 1レコード分のテキストをフィールドに分解する
fn parse_record(path: &Path, record: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(record.as_bytes());

    match reader.records().next() {
        Some(Ok(fields)) => Ok(fields.iter().map(String::from).collect()),
        Some(Err(e)) => Err(UploadError::local(path, e)),
        None => Ok(Vec::new()),
    }
}

#[async_trait]
impl LocalRepository for FsLocalRepository {
    async fn list_entries(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let dir = dir.to_path_buf();
        tokio::task::spawn_blocking(move || Self::list_entries_sync(&dir))
            .await
            .map_err(|e| UploadError::local(Path::new("<blocking task>"), e))?
    }

    async fn read_rows(&self, path: &Path) -> Result<Vec<Vec<String>>> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_rows_sync(&path))
            .await
            .map_err(|e| UploadError::local(Path::new("<blocking task>"), e))?
    }

    async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| UploadError::local(path, e))
    }
}

impl Default for FsLocalRepository {
    fn default() -> Self {
        Self::new()
    }
}
