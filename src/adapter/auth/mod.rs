//! Authentication Module
//!
//! Google サービスアカウント認証関連の機能

pub mod service_account;

pub use service_account::{create_drive_hub, create_sheets_hub};
