//! # Domain Repositories
//!
//! Repository trait（インターフェース）定義
//!
//! ## 特徴
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層で具体的な実装を提供（Google Drive/Sheets、ローカルFS、インメモリ）
//! - 依存性逆転の原則（DIP）を実現

pub mod local_repository;
pub mod remote_store;
pub mod tabular_service;
