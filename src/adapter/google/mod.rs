//! Google API Adapter Modules
//!
//! Google Drive / Sheets 呼び出しのための補助モジュール

pub mod query;
