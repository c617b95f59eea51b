//! # Domain Entities
//!
//! アップロード対象とその結果を表すエンティティとバリューオブジェクト
//!
//! ## エンティティ
//!
//! - **Category**: アップロード種別（閉じた列挙型）
//! - **FileDescriptor**: アップロード対象のファイル/ディレクトリ
//! - **UploadedObject**: アップロード済みリモートオブジェクト

pub mod category;
pub mod file_descriptor;
pub mod uploaded_object;
