//! # Generic Upload Use Case
//!
//! 任意のファイルをそのままアップロードするユースケース

use log::{info, warn};
use std::sync::Arc;

use crate::domain::entities::category::Category;
use crate::domain::entities::file_descriptor::FileDescriptor;
use crate::domain::entities::uploaded_object::UploadedObject;
use crate::domain::errors::Result;
use crate::domain::repositories::local_repository::LocalRepository;
use crate::domain::repositories::remote_store::RemoteStore;
use crate::domain::services::content_type::ContentTypeService;

/// 通常ファイルアップロードの結果
#[derive(Debug, Clone)]
pub struct GenericOutcome {
    pub object: UploadedObject,
    pub content_type: String,
    /// 同名オブジェクトが既に存在した場合の警告
    pub warning: Option<String>,
}

/// 通常ファイルアップロードユースケース
///
/// 同名オブジェクトが既にあっても同一とはみなさず、警告した上で常に新規作成する。
/// 同じ名前で繰り返し実行するとリモートに重複が生じる。
pub struct GenericUploadUseCase<R: RemoteStore, L: LocalRepository> {
    remote_store: Arc<R>,
    local_repository: Arc<L>,
}

impl<R: RemoteStore, L: LocalRepository> GenericUploadUseCase<R, L> {
    pub fn new(remote_store: Arc<R>, local_repository: Arc<L>) -> Self {
        Self {
            remote_store,
            local_repository,
        }
    }

    /// ファイルをアップロード
    ///
    /// # Errors
    ///
    /// リモート呼び出し、またはローカルファイルの読み込みに失敗した場合にエラーを返す
    pub async fn execute(&self, container_id: &str, file: &FileDescriptor) -> Result<GenericOutcome> {
        let content_type = ContentTypeService::guess(file.path());

        let warning = match self
            .remote_store
            .find_by_name(container_id, file.name())
            .await?
        {
            Some(existing_id) => {
                let message = format!(
                    "File {} already exists in the folder ({}); uploading a new copy",
                    file.name(),
                    existing_id
                );
                warn!("{}", message);
                Some(message)
            }
            None => None,
        };

        let bytes = self.local_repository.read_bytes(file.path()).await?;

        let id = self
            .remote_store
            .create_document(container_id, file.name(), &content_type)
            .await?;
        self.remote_store
            .upload_media(&id, bytes, &content_type)
            .await?;

        let object = UploadedObject::new(file.name(), id, Category::Generic);
        info!("File '{}' uploaded; URL: {}", file.name(), object.web_url());

        Ok(GenericOutcome {
            object,
            content_type,
            warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::predicate::eq;
    use std::path::{Path, PathBuf};

    use crate::domain::errors::UploadError;
    use crate::domain::repositories::remote_store::MockRemoteStore;

    struct MockLocalRepository;

    #[async_trait]
    impl LocalRepository for MockLocalRepository {
        async fn list_entries(&self, _dir: &Path) -> Result<Vec<PathBuf>> {
            Ok(vec![])
        }

        async fn read_rows(&self, _path: &Path) -> Result<Vec<Vec<String>>> {
            Ok(vec![])
        }

        async fn read_bytes(&self, _path: &Path) -> Result<Vec<u8>> {
            Ok(b"hello".to_vec())
        }
    }

    fn descriptor(path: &str) -> FileDescriptor {
        let path = PathBuf::from(path);
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        FileDescriptor::new(path, name, Category::Generic, "Sheet1".to_string())
    }

    #[tokio::test]
    async fn test_upload_new_file() {
        let mut remote = MockRemoteStore::new();
        remote.expect_find_by_name().returning(|_, _| Ok(None));
        remote
            .expect_create_document()
            .with(eq("folder-1"), eq("notes.txt"), eq("text/plain"))
            .times(1)
            .returning(|_, _, _| Ok("file-1".to_string()));
        remote
            .expect_upload_media()
            .withf(|id, bytes, mime| id == "file-1" && bytes == b"hello" && mime == "text/plain")
            .times(1)
            .returning(|_, _, _| Ok(()));

        let use_case = GenericUploadUseCase::new(Arc::new(remote), Arc::new(MockLocalRepository));

        let outcome = use_case
            .execute("folder-1", &descriptor("/data/notes.txt"))
            .await
            .unwrap();

        assert_eq!(outcome.object.id, "file-1");
        assert_eq!(outcome.content_type, "text/plain");
        assert!(outcome.warning.is_none());
    }

    #[tokio::test]
    async fn test_name_collision_warns_and_still_creates() {
        let mut remote = MockRemoteStore::new();
        remote
            .expect_find_by_name()
            .returning(|_, _| Ok(Some("old-id".to_string())));
        remote
            .expect_create_document()
            .times(1)
            .returning(|_, _, _| Ok("new-id".to_string()));
        remote
            .expect_upload_media()
            .with(eq("new-id"), mockall::predicate::always(), eq("text/plain"))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let use_case = GenericUploadUseCase::new(Arc::new(remote), Arc::new(MockLocalRepository));

        let outcome = use_case
            .execute("folder-1", &descriptor("/data/notes.txt"))
            .await
            .unwrap();

        assert_eq!(outcome.object.id, "new-id");
        let warning = outcome.warning.expect("collision should produce a warning");
        assert!(warning.contains("notes.txt"));
        assert!(warning.contains("old-id"));
    }

    #[tokio::test]
    async fn test_unknown_extension_uses_octet_stream() {
        let mut remote = MockRemoteStore::new();
        remote.expect_find_by_name().returning(|_, _| Ok(None));
        remote
            .expect_create_document()
            .with(eq("folder-1"), eq("blob.zzz9"), eq("application/octet-stream"))
            .returning(|_, _, _| Ok("file-2".to_string()));
        remote.expect_upload_media().returning(|_, _, _| Ok(()));

        let use_case = GenericUploadUseCase::new(Arc::new(remote), Arc::new(MockLocalRepository));

        let outcome = use_case
            .execute("folder-1", &descriptor("/data/blob.zzz9"))
            .await
            .unwrap();

        assert_eq!(outcome.content_type, "application/octet-stream");
    }

    #[tokio::test]
    async fn test_upload_failure_is_remote_access_error() {
        let mut remote = MockRemoteStore::new();
        remote.expect_find_by_name().returning(|_, _| Ok(None));
        remote
            .expect_create_document()
            .returning(|_, _, _| Ok("file-3".to_string()));
        remote
            .expect_upload_media()
            .returning(|_, _, _| Err(UploadError::remote("files.update", "quota exceeded")));

        let use_case = GenericUploadUseCase::new(Arc::new(remote), Arc::new(MockLocalRepository));

        let err = use_case
            .execute("folder-1", &descriptor("/data/notes.txt"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("files.update"));
        assert!(err.to_string().contains("quota exceeded"));
    }
}
