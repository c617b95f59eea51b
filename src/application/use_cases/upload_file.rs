//! # Upload File Use Case
//!
//! アップロードのディスパッチャ
//!
//! FileDescriptor の種別（Category）だけを見て、スプレッドシート・ディレクトリ・
//! 通常ファイルのいずれかのユースケースへ振り分ける。
//!
//! ディレクトリは再帰呼び出しではなく、保留中の (コンテナID, FileDescriptor) を積む
//! ワークキューで展開する。子要素は親フォルダの find-or-create が終わってから積まれるため、
//! 「親フォルダが先、子要素が後」の順序が常に守られる。

use log::{debug, info};
use std::sync::Arc;

use crate::application::dto::upload_summary::UploadSummary;
use crate::domain::entities::category::Category;
use crate::domain::entities::file_descriptor::FileDescriptor;
use crate::domain::errors::Result;
use crate::domain::repositories::local_repository::LocalRepository;
use crate::domain::repositories::remote_store::RemoteStore;
use crate::domain::repositories::tabular_service::TabularService;

use super::upload_directory::DirectoryUploadUseCase;
use super::upload_generic::GenericUploadUseCase;
use super::upload_spreadsheet::SpreadsheetUploadUseCase;

/// ディスパッチ待ちのアップロード
#[derive(Debug, Clone)]
struct PendingUpload {
    container_id: String,
    file: FileDescriptor,
}

/// アップロードユースケース（ディスパッチャ）
pub struct UploadFileUseCase<R: RemoteStore, T: TabularService, L: LocalRepository> {
    spreadsheet: SpreadsheetUploadUseCase<R, T, L>,
    generic: GenericUploadUseCase<R, L>,
    directory: DirectoryUploadUseCase<R, L>,
}

impl<R: RemoteStore, T: TabularService, L: LocalRepository> UploadFileUseCase<R, T, L> {
    /// 新しいユースケースを作成
    ///
    /// リモートクライアントは読み取り専用のハンドルとして全ハンドラで共有する
    ///
    /// # Arguments
    ///
    /// * `remote_store` - リモートストア
    /// * `tabular_service` - 表データサービス
    /// * `local_repository` - ローカルリポジトリ
    pub fn new(remote_store: Arc<R>, tabular_service: Arc<T>, local_repository: Arc<L>) -> Self {
        Self {
            spreadsheet: SpreadsheetUploadUseCase::new(
                remote_store.clone(),
                tabular_service,
                local_repository.clone(),
            ),
            generic: GenericUploadUseCase::new(remote_store.clone(), local_repository.clone()),
            directory: DirectoryUploadUseCase::new(remote_store, local_repository),
        }
    }

    /// ファイルまたはディレクトリツリーをアップロード
    ///
    /// 1件ずつ逐次処理する。最初のエラーで中断し、まだ始まっていない兄弟・祖先の処理は
    /// 行わない。既に完了したリモート操作は巻き戻さない。
    ///
    /// # Arguments
    ///
    /// * `container_id` - アップロード先フォルダのID
    /// * `root` - アップロード対象
    ///
    /// # Returns
    ///
    /// アップロード結果のサマリー
    ///
    /// # Errors
    ///
    /// いずれかのハンドラが失敗した場合、そのエラーをそのまま返す
    pub async fn execute(&self, container_id: &str, root: FileDescriptor) -> Result<UploadSummary> {
        let mut summary = UploadSummary::new();
        let mut pending = vec![PendingUpload {
            container_id: container_id.to_string(),
            file: root,
        }];

        while let Some(PendingUpload { container_id, file }) = pending.pop() {
            debug!(
                "Dispatching {} as {} into {}",
                file.path().display(),
                file.category(),
                container_id
            );

            match file.category() {
                Category::Spreadsheet => {
                    let outcome = self.spreadsheet.execute(&container_id, &file).await?;
                    if outcome.created {
                        summary.spreadsheets_created += 1;
                    } else {
                        summary.spreadsheets_updated += 1;
                    }
                    summary.cells_updated += outcome.cells_updated;
                    summary.objects.push(outcome.object);
                }
                Category::Generic => {
                    let outcome = self.generic.execute(&container_id, &file).await?;
                    summary.files_uploaded += 1;
                    summary.warnings.extend(outcome.warning);
                    summary.objects.push(outcome.object);
                }
                Category::Directory => {
                    let outcome = self.directory.execute(&container_id, &file).await?;
                    if outcome.created {
                        summary.folders_created += 1;
                    } else {
                        summary.folders_reused += 1;
                    }

                    // 逆順に積んで、列挙順どおりに取り出す
                    let folder_id = outcome.object.id.clone();
                    pending.extend(outcome.children.into_iter().rev().map(|child| {
                        info!("Uploading {}...", child.name());
                        PendingUpload {
                            container_id: folder_id.clone(),
                            file: child,
                        }
                    }));
                    summary.objects.push(outcome.object);
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    use crate::domain::errors::UploadError;
    use crate::domain::repositories::remote_store::MockRemoteStore;
    use crate::domain::repositories::tabular_service::MockTabularService;

    struct ReadDirRepository;

    #[async_trait]
    impl LocalRepository for ReadDirRepository {
        async fn list_entries(&self, dir: &Path) -> Result<Vec<PathBuf>> {
            let mut entries: Vec<PathBuf> = fs::read_dir(dir)
                .map_err(|e| UploadError::local(dir, e))?
                .map(|e| e.unwrap().path())
                .collect();
            entries.sort();
            Ok(entries)
        }

        async fn read_rows(&self, path: &Path) -> Result<Vec<Vec<String>>> {
            let content = fs::read_to_string(path).map_err(|e| UploadError::local(path, e))?;
            Ok(content
                .lines()
                .map(|l| l.split(',').map(String::from).collect())
                .collect())
        }

        async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
            fs::read(path).map_err(|e| UploadError::local(path, e))
        }
    }

    #[tokio::test]
    async fn test_dispatch_spreadsheet() {
        let temp_dir = TempDir::new().unwrap();
        let csv = temp_dir.path().join("people.csv");
        fs::write(&csv, "Name,Age\nAda,36\n").unwrap();

        let mut remote = MockRemoteStore::new();
        remote.expect_find_by_name().returning(|_, _| Ok(None));
        remote
            .expect_create_document()
            .returning(|_, _, _| Ok("sheet-1".to_string()));
        remote.expect_create_folder().never();
        remote.expect_upload_media().never();

        let mut tabular = MockTabularService::new();
        tabular.expect_ensure_sheet().returning(|_, _| Ok(()));
        tabular
            .expect_write_rows()
            .withf(|_, sheet, rows| {
                sheet == "Sheet1"
                    && rows == &vec![
                        vec!["Name".to_string(), "Age".to_string()],
                        vec!["Ada".to_string(), "36".to_string()],
                    ]
            })
            .returning(|_, _, _| Ok(4));

        let use_case =
            UploadFileUseCase::new(Arc::new(remote), Arc::new(tabular), Arc::new(ReadDirRepository));
        let summary = use_case
            .execute("root-folder", FileDescriptor::from_path(&csv, None, None))
            .await
            .unwrap();

        assert_eq!(summary.spreadsheets_created, 1);
        assert_eq!(summary.cells_updated, 4);
        assert_eq!(summary.total(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_generic() {
        let temp_dir = TempDir::new().unwrap();
        let txt = temp_dir.path().join("notes.txt");
        fs::write(&txt, "hello").unwrap();

        let mut remote = MockRemoteStore::new();
        remote.expect_find_by_name().returning(|_, _| Ok(None));
        remote
            .expect_create_document()
            .with(eq("root-folder"), eq("notes.txt"), eq("text/plain"))
            .returning(|_, _, _| Ok("file-1".to_string()));
        remote.expect_upload_media().returning(|_, _, _| Ok(()));

        let mut tabular = MockTabularService::new();
        tabular.expect_ensure_sheet().never();
        tabular.expect_write_rows().never();

        let use_case =
            UploadFileUseCase::new(Arc::new(remote), Arc::new(tabular), Arc::new(ReadDirRepository));
        let summary = use_case
            .execute("root-folder", FileDescriptor::from_path(&txt, None, None))
            .await
            .unwrap();

        assert_eq!(summary.files_uploaded, 1);
        assert!(summary.is_clean());
    }

    #[tokio::test]
    async fn test_parent_folder_created_before_children() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("root");
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("sub").join("b.txt"), "hello").unwrap();

        let mut seq = Sequence::new();
        let mut remote = MockRemoteStore::new();
        remote
            .expect_find_folder_by_name()
            .with(eq("top"), eq("root"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(None));
        remote
            .expect_create_folder()
            .with(eq("top"), eq("root"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok("folder-root".to_string()));
        remote
            .expect_find_folder_by_name()
            .with(eq("folder-root"), eq("sub"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(None));
        remote
            .expect_create_folder()
            .with(eq("folder-root"), eq("sub"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok("folder-sub".to_string()));
        remote
            .expect_find_by_name()
            .with(eq("folder-sub"), eq("b.txt"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(None));
        remote
            .expect_create_document()
            .with(eq("folder-sub"), eq("b.txt"), eq("text/plain"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok("file-b".to_string()));
        remote
            .expect_upload_media()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));

        let use_case = UploadFileUseCase::new(
            Arc::new(remote),
            Arc::new(MockTabularService::new()),
            Arc::new(ReadDirRepository),
        );
        let summary = use_case
            .execute("top", FileDescriptor::from_path(&root, None, None))
            .await
            .unwrap();

        assert_eq!(summary.folders_created, 2);
        assert_eq!(summary.files_uploaded, 1);
    }

    #[tokio::test]
    async fn test_failure_aborts_remaining_siblings() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("root");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("b.txt"), "b").unwrap();

        let mut remote = MockRemoteStore::new();
        remote
            .expect_find_folder_by_name()
            .with(eq("top"), eq("root"))
            .returning(|_, _| Ok(Some("folder-root".to_string())));
        remote
            .expect_find_by_name()
            .with(eq("folder-root"), eq("a.txt"))
            .times(1)
            .returning(|_, _| Err(UploadError::remote("files.list", "503 Service Unavailable")));
        remote
            .expect_find_by_name()
            .with(eq("folder-root"), eq("b.txt"))
            .never();
        remote.expect_create_document().never();

        let use_case = UploadFileUseCase::new(
            Arc::new(remote),
            Arc::new(MockTabularService::new()),
            Arc::new(ReadDirRepository),
        );
        let result = use_case
            .execute("top", FileDescriptor::from_path(&root, None, None))
            .await;

        match result {
            Err(UploadError::RemoteAccess { operation, cause }) => {
                assert_eq!(operation, "files.list");
                assert!(cause.contains("503"));
            }
            other => panic!("expected remote access error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("empty");
        fs::create_dir(&root).unwrap();

        let mut remote = MockRemoteStore::new();
        remote.expect_find_folder_by_name().returning(|_, _| Ok(None));
        remote
            .expect_create_folder()
            .times(1)
            .returning(|_, _| Ok("folder-empty".to_string()));

        let use_case = UploadFileUseCase::new(
            Arc::new(remote),
            Arc::new(MockTabularService::new()),
            Arc::new(ReadDirRepository),
        );
        let summary = use_case
            .execute("top", FileDescriptor::from_path(&root, None, None))
            .await
            .unwrap();

        assert_eq!(summary.folders_created, 1);
        assert_eq!(summary.total(), 1);
    }
}
