//! In-Memory Workspace Implementation
//!
//! RemoteStore と TabularService のインメモリ実装。
//! `--dry-run` でアップロード結果のリモートツリーを表示するために使う。

use async_trait::async_trait;
use log::info;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::errors::{Result, UploadError};
use crate::domain::repositories::remote_store::RemoteStore;
use crate::domain::repositories::tabular_service::TabularService;
use crate::domain::services::content_type::FOLDER_MIME_TYPE;

/// インメモリのリモートオブジェクト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryObject {
    pub id: String,
    pub parent_id: String,
    pub name: String,
    pub mime_type: String,
    /// アップロードされた内容（通常ファイル）
    pub content: Option<Vec<u8>>,
    /// シート名 → 行（スプレッドシート）
    pub sheets: BTreeMap<String, Vec<Vec<String>>>,
}

impl MemoryObject {
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME_TYPE
    }
}

/// インメモリのワークスペース（作成順にオブジェクトを保持）
#[derive(Debug, Default)]
pub struct InMemoryWorkspace {
    objects: Mutex<Vec<MemoryObject>>,
}

impl InMemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全オブジェクトのスナップショット（作成順）
    pub fn objects(&self) -> Vec<MemoryObject> {
        self.lock().clone()
    }

    /// 親コンテナ直下のオブジェクト（作成順）
    pub fn children_of(&self, parent_id: &str) -> Vec<MemoryObject> {
        self.lock()
            .iter()
            .filter(|o| o.parent_id == parent_id)
            .cloned()
            .collect()
    }

    /// IDでオブジェクトを取得
    pub fn get(&self, id: &str) -> Option<MemoryObject> {
        self.lock().iter().find(|o| o.id == id).cloned()
    }

    /// コンテナ以下のツリーを字下げ付きの行で返す
    pub fn render_tree(&self, root_id: &str) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(root_id, 0, &mut lines);
        lines
    }

    fn render_into(&self, parent_id: &str, depth: usize, lines: &mut Vec<String>) {
        for object in self.children_of(parent_id) {
            let indent = "  ".repeat(depth);
            if object.is_folder() {
                lines.push(format!("{}{}/", indent, object.name));
                self.render_into(&object.id, depth + 1, lines);
            } else if object.sheets.is_empty() {
                let size = object.content.as_ref().map(Vec::len).unwrap_or(0);
                lines.push(format!(
                    "{}{} ({}, {} bytes)",
                    indent, object.name, object.mime_type, size
                ));
            } else {
                let tabs: Vec<String> = object
                    .sheets
                    .iter()
                    .map(|(title, rows)| format!("{}: {} rows", title, rows.len()))
                    .collect();
                lines.push(format!("{}{} [{}]", indent, object.name, tabs.join(", ")));
            }
        }
    }

    fn insert(&self, parent_id: &str, name: &str, mime_type: &str) -> String {
        let id = uuid::Uuid::new_v4().simple().to_string();
        self.lock().push(MemoryObject {
            id: id.clone(),
            parent_id: parent_id.to_string(),
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            content: None,
            sheets: BTreeMap::new(),
        });
        id
    }

    fn with_object<F, T>(&self, operation: &str, id: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut MemoryObject) -> T,
    {
        let mut objects = self.lock();
        let object = objects
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| UploadError::remote(operation, format!("object {} not found", id)))?;
        Ok(f(object))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<MemoryObject>> {
        // poison 後も中身は有効
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl RemoteStore for InMemoryWorkspace {
    async fn find_by_name(&self, parent_id: &str, name: &str) -> Result<Option<String>> {
        Ok(self
            .lock()
            .iter()
            .find(|o| o.parent_id == parent_id && o.name == name)
            .map(|o| o.id.clone()))
    }

    async fn find_folder_by_name(&self, parent_id: &str, name: &str) -> Result<Option<String>> {
        Ok(self
            .lock()
            .iter()
            .find(|o| o.parent_id == parent_id && o.name == name && o.is_folder())
            .map(|o| o.id.clone()))
    }

    async fn create_folder(&self, parent_id: &str, name: &str) -> Result<String> {
        let id = self.insert(parent_id, name, FOLDER_MIME_TYPE);
        info!("[dry-run] create folder {} ({})", name, id);
        Ok(id)
    }

    async fn create_document(
        &self,
        parent_id: &str,
        name: &str,
        mime_type: &str,
    ) -> Result<String> {
        let id = self.insert(parent_id, name, mime_type);
        info!("[dry-run] create {} {} ({})", mime_type, name, id);
        Ok(id)
    }

    async fn upload_media(&self, id: &str, bytes: Vec<u8>, mime_type: &str) -> Result<()> {
        info!("[dry-run] upload {} bytes of {} to {}", bytes.len(), mime_type, id);
        self.with_object("upload_media", id, |object| {
            object.mime_type = mime_type.to_string();
            object.content = Some(bytes);
        })
    }
}

#[async_trait]
impl TabularService for InMemoryWorkspace {
    async fn ensure_sheet(&self, document_id: &str, sheet_name: &str) -> Result<()> {
        self.with_object("ensure_sheet", document_id, |object| {
            object.sheets.entry(sheet_name.to_string()).or_default();
        })
    }

    async fn write_rows(
        &self,
        document_id: &str,
        sheet_name: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<usize> {
        let cells = rows.iter().map(Vec::len).sum();
        self.with_object("write_rows", document_id, |object| {
            object.sheets.insert(sheet_name.to_string(), rows);
        })?;
        info!("[dry-run] {} cells written to {}!{}", cells, document_id, sheet_name);
        Ok(cells)
    }
}
