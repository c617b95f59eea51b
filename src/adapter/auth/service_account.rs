//! Service Account Authentication
//!
//! サービスアカウント鍵による Google Drive / Sheets クライアントの作成

use google_drive3 as drive3;
use google_sheets4 as sheets4;
use log::debug;

use crate::domain::errors::{Result, UploadError};

pub type DriveConnector = drive3::hyper_rustls::HttpsConnector<
    drive3::hyper_util::client::legacy::connect::HttpConnector,
>;
pub type SheetsConnector = sheets4::hyper_rustls::HttpsConnector<
    sheets4::hyper_util::client::legacy::connect::HttpConnector,
>;

/// Expands tilde in path and returns the full path
pub fn expand_key_path(key_path: &str) -> String {
    shellexpand::tilde(key_path).to_string()
}

/// Creates a Drive v3 hub authenticated with the service account key
#[cfg_attr(coverage_nightly, coverage(off))]
pub async fn create_drive_hub(key_path: &str) -> Result<drive3::DriveHub<DriveConnector>> {
    let expanded_path = expand_key_path(key_path);
    let key = drive3::yup_oauth2::read_service_account_key(&expanded_path)
        .await
        .map_err(|e| key_error(&expanded_path, e))?;

    let connector = drive3::hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| UploadError::remote("load native root certs", e))?
        .https_or_http()
        .enable_http1()
        .build();
    let client = drive3::hyper_util::client::legacy::Client::builder(
        drive3::hyper_util::rt::TokioExecutor::new(),
    )
    .build(connector);

    let auth = drive3::yup_oauth2::ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .map_err(|e| UploadError::remote("build service account authenticator", e))?;

    debug!("Created Drive client from {}", expanded_path);
    Ok(drive3::DriveHub::new(client, auth))
}

/// Creates a Sheets v4 hub authenticated with the service account key
#[cfg_attr(coverage_nightly, coverage(off))]
pub async fn create_sheets_hub(key_path: &str) -> Result<sheets4::Sheets<SheetsConnector>> {
    let expanded_path = expand_key_path(key_path);
    let key = sheets4::yup_oauth2::read_service_account_key(&expanded_path)
        .await
        .map_err(|e| key_error(&expanded_path, e))?;

    let connector = sheets4::hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| UploadError::remote("load native root certs", e))?
        .https_or_http()
        .enable_http1()
        .build();
    let client = sheets4::hyper_util::client::legacy::Client::builder(
        sheets4::hyper_util::rt::TokioExecutor::new(),
    )
    .build(connector);

    let auth = sheets4::yup_oauth2::ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .map_err(|e| UploadError::remote("build service account authenticator", e))?;

    debug!("Created Sheets client from {}", expanded_path);
    Ok(sheets4::Sheets::new(client, auth))
}

/// 鍵ファイルが読めないのは設定の誤り
fn key_error(path: &str, cause: std::io::Error) -> UploadError {
    UploadError::Configuration(format!(
        "failed to read service account key {}: {}",
        path, cause
    ))
}
