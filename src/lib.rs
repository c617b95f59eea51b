//! # gpush
//!
//! ローカルのファイル・ディレクトリを Google Drive / Google Sheets にアップロードするツール
//!
//! - `.csv` / `.xlsx` / `.xls` はスプレッドシートとして作成（または既存を上書き）
//! - ディレクトリはフォルダ構成ごとリモートに再現
//! - その他のファイルはそのままアップロード
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 分類規則・エンティティ・Repository trait（外部依存なし）
//! - **Application層**: ディスパッチとアップロードの流れ（ユースケース）
//! - **Adapter層**: 外部システムとの統合（Google Drive/Sheets, ファイルシステム等）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
