//! # Upload Summary DTO
//!
//! アップロード結果のサマリー

use crate::domain::entities::uploaded_object::UploadedObject;

/// アップロード結果のサマリー
#[derive(Debug, Clone, Default)]
pub struct UploadSummary {
    /// 新規作成したフォルダ数
    pub folders_created: usize,
    /// 既存のものを再利用したフォルダ数
    pub folders_reused: usize,
    /// 新規作成したスプレッドシート数
    pub spreadsheets_created: usize,
    /// 既存のものに上書きしたスプレッドシート数
    pub spreadsheets_updated: usize,
    /// アップロードした通常ファイル数
    pub files_uploaded: usize,
    /// 更新されたセルの合計
    pub cells_updated: usize,
    /// 処理したオブジェクト（処理順）
    pub objects: Vec<UploadedObject>,
    /// 致命的でない警告
    pub warnings: Vec<String>,
}

impl UploadSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 処理したオブジェクトの総数
    pub fn total(&self) -> usize {
        self.objects.len()
    }

    /// 警告がなかったかどうか
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::category::Category;

    #[test]
    fn test_new_summary_is_empty() {
        let summary = UploadSummary::new();

        assert_eq!(summary.total(), 0);
        assert_eq!(summary.cells_updated, 0);
        assert!(summary.is_clean());
    }

    #[test]
    fn test_total_and_warnings() {
        let mut summary = UploadSummary::new();
        summary
            .objects
            .push(UploadedObject::new("a.txt", "id-1", Category::Generic));
        summary.warnings.push("File a.txt already exists".to_string());

        assert_eq!(summary.total(), 1);
        assert!(!summary.is_clean());
    }
}
