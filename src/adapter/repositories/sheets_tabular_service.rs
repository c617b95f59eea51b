//! Google Sheets Tabular Service Implementation
//!
//! TabularServiceのGoogle Sheets v4実装

use async_trait::async_trait;
use google_sheets4 as sheets4;
use log::debug;

use crate::adapter::auth::service_account::SheetsConnector;
use crate::adapter::google::query::a1_sheet_range;
use crate::domain::errors::{Result, UploadError};
use crate::domain::repositories::tabular_service::TabularService;

/// Google Sheets表データサービス
pub struct SheetsTabularService {
    hub: sheets4::Sheets<SheetsConnector>,
}

impl SheetsTabularService {
    /// 新しいリポジトリを作成
    pub fn new(hub: sheets4::Sheets<SheetsConnector>) -> Self {
        Self { hub }
    }

    /// 文字列の行をRAW書き込み用のJSON値に変換
    fn to_cell_values(rows: Vec<Vec<String>>) -> Vec<Vec<serde_json::Value>> {
        rows.into_iter()
            .map(|row| row.into_iter().map(serde_json::Value::String).collect())
            .collect()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl TabularService for SheetsTabularService {
    async fn ensure_sheet(&self, document_id: &str, sheet_name: &str) -> Result<()> {
        let (_resp, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(document_id)
            .param("fields", "sheets.properties.title")
            .doit()
            .await
            .map_err(|e| UploadError::remote("spreadsheets.get", e))?;

        let exists = spreadsheet
            .sheets
            .unwrap_or_default()
            .iter()
            .filter_map(|sheet| sheet.properties.as_ref())
            .any(|props| props.title.as_deref() == Some(sheet_name));

        if exists {
            debug!("Found existing sheet: {}", sheet_name);
            return Ok(());
        }

        let mut properties = sheets4::api::SheetProperties::default();
        properties.title = Some(sheet_name.to_string());
        let mut add_sheet = sheets4::api::AddSheetRequest::default();
        add_sheet.properties = Some(properties);
        let mut request = sheets4::api::Request::default();
        request.add_sheet = Some(add_sheet);
        let mut batch = sheets4::api::BatchUpdateSpreadsheetRequest::default();
        batch.requests = Some(vec![request]);

        self.hub
            .spreadsheets()
            .batch_update(batch, document_id)
            .doit()
            .await
            .map_err(|e| UploadError::remote("spreadsheets.batchUpdate", e))?;

        debug!("Created new sheet: {}", sheet_name);
        Ok(())
    }

    async fn write_rows(
        &self,
        document_id: &str,
        sheet_name: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<usize> {
        let range = a1_sheet_range(sheet_name);
        let mut values = sheets4::api::ValueRange::default();
        values.range = Some(range.clone());
        values.values = Some(Self::to_cell_values(rows));

        let (_resp, response) = self
            .hub
            .spreadsheets()
            .values_update(values, document_id, &range)
            .value_input_option("RAW")
            .doit()
            .await
            .map_err(|e| UploadError::remote("spreadsheets.values.update", e))?;

        Ok(response.updated_cells.unwrap_or(0).max(0) as usize)
    }
}
