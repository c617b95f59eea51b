//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod drive_remote_store;
pub mod fs_local_repository;
pub mod in_memory_workspace;
pub mod sheets_tabular_service;
