//! # Spreadsheet Upload Use Case
//!
//! CSVファイルをスプレッドシートへ書き込むユースケース

use log::{debug, info};
use std::sync::Arc;

use crate::domain::entities::category::Category;
use crate::domain::entities::file_descriptor::FileDescriptor;
use crate::domain::entities::uploaded_object::UploadedObject;
use crate::domain::errors::Result;
use crate::domain::repositories::local_repository::LocalRepository;
use crate::domain::repositories::remote_store::RemoteStore;
use crate::domain::repositories::tabular_service::TabularService;
use crate::domain::services::content_type::SPREADSHEET_MIME_TYPE;

/// スプレッドシートアップロードの結果
#[derive(Debug, Clone)]
pub struct SpreadsheetOutcome {
    pub object: UploadedObject,
    /// 新規作成した場合は `true`、既存ドキュメントへの上書きは `false`
    pub created: bool,
    /// 更新されたセル数
    pub cells_updated: usize,
}

/// スプレッドシートアップロードユースケース
///
/// 同じ名前で何度実行しても同じドキュメントに書き込む（find-or-create）。
/// 書き込みは毎回シート先頭からの全体上書きで、追記や差分はしない。
pub struct SpreadsheetUploadUseCase<R: RemoteStore, T: TabularService, L: LocalRepository> {
    remote_store: Arc<R>,
    tabular_service: Arc<T>,
    local_repository: Arc<L>,
}

impl<R: RemoteStore, T: TabularService, L: LocalRepository> SpreadsheetUploadUseCase<R, T, L> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `remote_store` - リモートストア
    /// * `tabular_service` - 表データサービス
    /// * `local_repository` - ローカルリポジトリ
    pub fn new(remote_store: Arc<R>, tabular_service: Arc<T>, local_repository: Arc<L>) -> Self {
        Self {
            remote_store,
            tabular_service,
            local_repository,
        }
    }

    /// CSVをスプレッドシートへアップロード
    ///
    /// # Arguments
    ///
    /// * `container_id` - 書き込み先フォルダのID
    /// * `file` - アップロード対象
    ///
    /// # Errors
    ///
    /// リモート呼び出し、またはローカルCSVの読み込みに失敗した場合にエラーを返す
    pub async fn execute(
        &self,
        container_id: &str,
        file: &FileDescriptor,
    ) -> Result<SpreadsheetOutcome> {
        let existing = self
            .remote_store
            .find_by_name(container_id, file.name())
            .await?;

        let (document_id, created) = match existing {
            Some(id) => {
                debug!("Found existing spreadsheet '{}' ({})", file.name(), id);
                (id, false)
            }
            None => {
                let id = self
                    .remote_store
                    .create_document(container_id, file.name(), SPREADSHEET_MIME_TYPE)
                    .await?;
                info!("Created new spreadsheet '{}' ({})", file.name(), id);
                (id, true)
            }
        };

        let rows = self.local_repository.read_rows(file.path()).await?;
        debug!("Read {} rows from {}", rows.len(), file.path().display());

        self.tabular_service
            .ensure_sheet(&document_id, file.sheet_name())
            .await?;

        let cells_updated = self
            .tabular_service
            .write_rows(&document_id, file.sheet_name(), rows)
            .await?;

        let object = UploadedObject::new(file.name(), document_id, Category::Spreadsheet);
        debug!("{} cells updated.", cells_updated);
        info!("Google Sheet can be found at: {}", object.web_url());

        Ok(SpreadsheetOutcome {
            object,
            created,
            cells_updated,
        })
    }
}
