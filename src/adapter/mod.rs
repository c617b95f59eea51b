//! Adapter Layer
//!
//! 外部システム（Google Drive/Sheets, ファイルシステム）との統合

pub mod auth;
pub mod config;
pub mod google;
pub mod repositories;
