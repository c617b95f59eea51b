//! # Domain Layer
//!
//! このモジュールはアップロードの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - Google API やファイルシステムの実装を知らない
//! - フレームワークに依存しない
//! - 純粋なビジネスロジック（分類・ディスパッチの規則）
//!
//! ## 構成要素
//!
//! - **entities**: FileDescriptor, Category, UploadedObject
//! - **errors**: ドメインエラー（UploadError）
//! - **repositories**: Repository trait（RemoteStore, TabularService, LocalRepository）
//! - **services**: Domain Service（拡張子分類、Content-Type推定）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
