//! # Content Type Service
//!
//! 拡張子からContent-Typeを推定する

use std::path::Path;

/// 推定できなかった場合のContent-Type
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Google スプレッドシートとして作成する際のMIMEタイプ
pub const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

/// Google Drive フォルダのMIMEタイプ
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Content-Type推定サービス
pub struct ContentTypeService;

impl ContentTypeService {
    /// パスの拡張子からContent-Typeを推定
    ///
    /// 不明な拡張子や拡張子なしは `application/octet-stream`
    pub fn guess(path: &Path) -> String {
        mime_guess::from_path(path)
            .first()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string())
    }
}
