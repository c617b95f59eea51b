//! Configuration
//!
//! 設定の読み込み（JSON設定ファイル + 環境変数）

use serde::{Deserialize, Serialize};
use std::fs;

use crate::domain::errors::{Result, UploadError};

/// アップロード先フォルダIDの環境変数
pub const FOLDER_ID_VAR: &str = "FOLDER_ID";

/// サービスアカウント鍵ファイルパスの環境変数
pub const SERVICE_ACCOUNT_FILE_VAR: &str = "SERVICE_ACCOUNT_FILE";

/// 設定ファイルの内容（すべて任意。環境変数が優先される）
#[derive(Debug, Default, Deserialize, Serialize)]
struct ConfigFile {
    folder_id: Option<String>,
    service_account_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// アップロード先フォルダのID
    pub folder_id: String,

    // Authentication
    pub service_account_file: Option<String>,
}

impl Config {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self> {
        Self::resolve(ConfigFile::default(), |key| std::env::var(key).ok())
    }

    /// 設定ファイルを読み込み、環境変数で上書きする
    pub fn load(path: &str) -> Result<Self> {
        let file = Self::read_file(path)?;
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// 任意の参照関数から設定を組み立てる
    ///
    /// # Errors
    ///
    /// `FOLDER_ID` が見つからない場合に `UploadError::Configuration` を返す
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(ConfigFile::default(), lookup)
    }

    /// 認証ファイルのパス（必須）
    ///
    /// # Errors
    ///
    /// 未設定の場合に `UploadError::Configuration` を返す
    pub fn require_service_account_file(&self) -> Result<&str> {
        self.service_account_file.as_deref().ok_or_else(|| {
            UploadError::Configuration(format!(
                "{} is not set; a service account key file is required",
                SERVICE_ACCOUNT_FILE_VAR
            ))
        })
    }

    fn read_file(path: &str) -> Result<ConfigFile> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref()).map_err(|e| {
            UploadError::Configuration(format!("failed to read config file {}: {}", path, e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            UploadError::Configuration(format!("failed to parse config file {}: {}", path, e))
        })
    }

    fn resolve<F>(file: ConfigFile, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let folder_id = non_empty(lookup(FOLDER_ID_VAR))
            .or_else(|| non_empty(file.folder_id))
            .ok_or_else(|| {
                UploadError::Configuration(format!(
                    "{} is not set; the destination folder id is required",
                    FOLDER_ID_VAR
                ))
            })?;

        let service_account_file =
            non_empty(lookup(SERVICE_ACCOUNT_FILE_VAR)).or_else(|| non_empty(file.service_account_file));

        Ok(Self {
            folder_id,
            service_account_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_success() {
        let config = Config::from_lookup(lookup_from(&[
            ("FOLDER_ID", "folder-123"),
            ("SERVICE_ACCOUNT_FILE", "/keys/sa.json"),
        ]))
        .unwrap();

        assert_eq!(config.folder_id, "folder-123");
        assert_eq!(config.require_service_account_file().unwrap(), "/keys/sa.json");
    }

    #[test]
    fn test_missing_folder_id_is_configuration_error() {
        let result = Config::from_lookup(lookup_from(&[("SERVICE_ACCOUNT_FILE", "/keys/sa.json")]));

        match result {
            Err(UploadError::Configuration(msg)) => assert!(msg.contains("FOLDER_ID")),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_folder_id_is_configuration_error() {
        let result = Config::from_lookup(lookup_from(&[("FOLDER_ID", "  ")]));
        assert!(matches!(result, Err(UploadError::Configuration(_))));
    }

    #[test]
    fn test_missing_service_account_file() {
        let config = Config::from_lookup(lookup_from(&[("FOLDER_ID", "folder-123")])).unwrap();

        assert!(config.service_account_file.is_none());
        let err = config.require_service_account_file().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_env_overrides_config_file() {
        let file = ConfigFile {
            folder_id: Some("from-file".to_string()),
            service_account_file: Some("/file/key.json".to_string()),
        };

        let config = Config::resolve(file, lookup_from(&[("FOLDER_ID", "from-env")])).unwrap();

        assert_eq!(config.folder_id, "from-env");
        assert_eq!(config.service_account_file.as_deref(), Some("/file/key.json"));
    }

    #[test]
    fn test_read_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"{
            "folder_id": "folder-from-json",
            "service_account_file": "~/.config/gpush/key.json"
        }"#;
        file.write_all(json.as_bytes()).unwrap();

        let parsed = Config::read_file(file.path().to_str().unwrap()).unwrap();

        assert_eq!(parsed.folder_id.as_deref(), Some("folder-from-json"));
        assert_eq!(
            parsed.service_account_file.as_deref(),
            Some("~/.config/gpush/key.json")
        );
    }

    #[test]
    fn test_read_missing_config_file() {
        let result = Config::read_file("/nonexistent/gpush/config.json");
        assert!(matches!(result, Err(UploadError::Configuration(_))));
    }
}
