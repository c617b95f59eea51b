//! # Extension Classifier
//!
//! 拡張子によるアップロード種別の分類

use std::path::Path;

use crate::domain::entities::category::Category;

/// スプレッドシートとして扱う拡張子（大文字小文字を区別する）
pub const SPREADSHEET_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];

/// 拡張子分類サービス
///
/// 分類は (拡張子, ディレクトリかどうか) だけで決まる純粋関数。
/// ファイル内容や過去のアップロードは関与しない。
pub struct ExtensionClassifier;

impl ExtensionClassifier {
    /// 種別を分類する
    ///
    /// # Arguments
    ///
    /// * `path` - ローカルパス（拡張子の抽出にのみ使う）
    /// * `is_dir` - パスが既存のディレクトリかどうか
    ///
    /// # 例
    ///
    /// ```
    /// use std::path::Path;
    /// use gpush::domain::entities::category::Category;
    /// use gpush::domain::services::classifier::ExtensionClassifier;
    ///
    /// assert_eq!(ExtensionClassifier::classify(Path::new("a.csv"), false), Category::Spreadsheet);
    /// assert_eq!(ExtensionClassifier::classify(Path::new("a.CSV"), false), Category::Generic);
    /// assert_eq!(ExtensionClassifier::classify(Path::new("photos"), true), Category::Directory);
    /// assert_eq!(ExtensionClassifier::classify(Path::new("Makefile"), false), Category::Generic);
    /// ```
    pub fn classify(path: &Path, is_dir: bool) -> Category {
        match Self::extension(path) {
            Some(ext) if SPREADSHEET_EXTENSIONS.contains(&ext) => Category::Spreadsheet,
            None if is_dir => Category::Directory,
            _ => Category::Generic,
        }
    }

    /// ファイルシステムを確認して種別を分類する
    ///
    /// ディレクトリ判定には実際の存在確認が必要。拡張子がないだけでは Directory にならない。
    pub fn classify_path(path: &Path) -> Category {
        Self::classify(path, path.is_dir())
    }

    /// ベース名の最後の `.` 以降
    ///
    /// `.env` のようなドットファイルは拡張子なし、`file.` は空文字列の拡張子を持つ
    fn extension(path: &Path) -> Option<&str> {
        path.extension().map(|ext| ext.to_str().unwrap_or_default())
    }
}
