//! # FileDescriptor Entity
//!
//! アップロード対象のファイル/ディレクトリを表すエンティティ

use std::path::{Path, PathBuf};

use super::category::Category;
use crate::domain::services::classifier::ExtensionClassifier;

/// 書き込み先シート名のデフォルト
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// アップロード対象
///
/// 構築後は不変。ディレクトリの子要素ごとに新しい FileDescriptor を作る。
/// 種別（category）は構築時に一度だけ分類され、ディスパッチ時に再分類しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    path: PathBuf,
    name: String,
    category: Category,
    sheet_name: String,
}

impl FileDescriptor {
    /// パスから FileDescriptor を作成
    ///
    /// # Arguments
    ///
    /// * `path` - ローカルパス
    /// * `name` - リモート上の表示名（`None` の場合はパスのベース名）
    /// * `sheet_name` - 書き込み先シート名（`None` の場合は `Sheet1`）
    pub fn from_path(
        path: impl Into<PathBuf>,
        name: Option<String>,
        sheet_name: Option<String>,
    ) -> Self {
        let path = path.into();
        let category = ExtensionClassifier::classify_path(&path);
        let name = name.unwrap_or_else(|| default_name(&path));

        Self {
            path,
            name,
            category,
            sheet_name: sheet_name.unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
        }
    }

    /// 種別を明示して作成（分類済みの場合）
    pub fn new(path: PathBuf, name: String, category: Category, sheet_name: String) -> Self {
        Self {
            path,
            name,
            category,
            sheet_name,
        }
    }

    /// ディレクトリ内の子要素の FileDescriptor を作成
    ///
    /// 名前は子要素のベース名、シート名は親から引き継ぐ
    pub fn child(&self, child_path: PathBuf) -> Self {
        Self::from_path(child_path, None, Some(self.sheet_name.clone()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }
}

/// パスのベース名（拡張子を含む）
///
/// `.` のようにベース名を持たないパスは正規化してから名前を取る
fn default_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }

    path.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| path.display().to_string())
}
