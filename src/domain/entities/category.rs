//! # Category Value Object
//!
//! アップロード種別

use std::fmt;
use std::path::Path;

use crate::domain::services::classifier::ExtensionClassifier;

/// アップロード種別
///
/// ディスパッチは常にこの列挙型の網羅的な `match` で行う。
/// 新しい種別を追加するとコンパイラが未処理の分岐を検出する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `.csv` / `.xlsx` / `.xls`
    Spreadsheet,
    /// 拡張子なしの既存ディレクトリ
    Directory,
    /// それ以外すべて
    Generic,
}

impl Category {
    /// ローカルのパスを分類する（ディレクトリかどうかはファイルシステムで確認）
    pub fn of_path(path: &Path) -> Self {
        ExtensionClassifier::classify_path(path)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Spreadsheet => "spreadsheet",
            Category::Directory => "directory",
            Category::Generic => "generic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
