//! # Domain Services
//!
//! エンティティに属さないビジネスルール
//!
//! - **ExtensionClassifier**: 拡張子によるアップロード種別の分類
//! - **ContentTypeService**: 拡張子からのContent-Type推定

pub mod classifier;
pub mod content_type;
