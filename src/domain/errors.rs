//! # Upload Errors
//!
//! アップロード処理で発生するエラーの定義

use std::fmt::Display;
use std::path::Path;

use thiserror::Error;

/// ドメイン層の Result 型
pub type Result<T> = std::result::Result<T, UploadError>;

/// アップロードエラー
///
/// 分類（Classifier）は失敗しないため、分類エラーは存在しない
#[derive(Debug, Error)]
pub enum UploadError {
    /// 必須の設定値（FOLDER_ID、認証ファイルなど）が欠けている
    #[error("configuration error: {0}")]
    Configuration(String),

    /// リモートサービス呼び出しの失敗（ネットワーク、認証、クォータなど）
    #[error("remote access error in {operation}: {cause}")]
    RemoteAccess { operation: String, cause: String },

    /// ローカルファイルの読み込み・CSVパースの失敗
    #[error("failed to read {path}: {cause}")]
    LocalRead { path: String, cause: String },
}

impl UploadError {
    /// リモート呼び出しの失敗を操作名付きでラップする
    pub fn remote(operation: impl Into<String>, cause: impl Display) -> Self {
        Self::RemoteAccess {
            operation: operation.into(),
            cause: cause.to_string(),
        }
    }

    /// ローカル読み込みの失敗をパス付きでラップする
    pub fn local(path: &Path, cause: impl Display) -> Self {
        Self::LocalRead {
            path: path.display().to_string(),
            cause: cause.to_string(),
        }
    }

    /// プロセス終了コード
    ///
    /// - 2: 設定エラー
    /// - 3: リモートアクセスエラー
    /// - 1: その他（ローカル読み込み）
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration(_) => 2,
            Self::RemoteAccess { .. } => 3,
            Self::LocalRead { .. } => 1,
        }
    }
}
