//! # Use Cases
//!
//! アップロードのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **UploadFileUseCase**: 種別によるディスパッチ（ディレクトリはワークキューで展開）
//! - **SpreadsheetUploadUseCase**: CSVをスプレッドシートへ書き込む
//! - **GenericUploadUseCase**: 任意のファイルをそのままアップロード
//! - **DirectoryUploadUseCase**: ローカルディレクトリをリモートフォルダとして再現

pub mod upload_directory;
pub mod upload_file;
pub mod upload_generic;
pub mod upload_spreadsheet;
