//! # Tabular Service Trait
//!
//! スプレッドシート内のシート（タブ）編集を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::Result;

/// 表データサービス
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TabularService: Send + Sync {
    /// シートが存在しなければ作成する
    ///
    /// 既存シートのタイトルと完全一致する場合は何もしない
    async fn ensure_sheet(&self, document_id: &str, sheet_name: &str) -> Result<()>;

    /// シートの先頭から行を上書きする（RAW値、数式として解釈しない）
    ///
    /// # Returns
    ///
    /// 更新されたセル数
    async fn write_rows(
        &self,
        document_id: &str,
        sheet_name: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<usize>;
}
