//! # Directory Upload Use Case
//!
//! ローカルディレクトリをリモートフォルダとして再現するユースケース

use log::{debug, info};
use std::sync::Arc;

use crate::domain::entities::category::Category;
use crate::domain::entities::file_descriptor::FileDescriptor;
use crate::domain::entities::uploaded_object::UploadedObject;
use crate::domain::errors::Result;
use crate::domain::repositories::local_repository::LocalRepository;
use crate::domain::repositories::remote_store::RemoteStore;

/// ディレクトリアップロードの結果
#[derive(Debug, Clone)]
pub struct DirectoryOutcome {
    /// 作成または再利用したフォルダ
    pub object: UploadedObject,
    pub created: bool,
    /// 子要素（ディスパッチ待ち、列挙順）
    pub children: Vec<FileDescriptor>,
}

/// ディレクトリアップロードユースケース
///
/// フォルダの find-or-create だけを行い、子要素は FileDescriptor として返す。
/// 子要素のディスパッチは呼び出し側（UploadFileUseCase）が行う。
pub struct DirectoryUploadUseCase<R: RemoteStore, L: LocalRepository> {
    remote_store: Arc<R>,
    local_repository: Arc<L>,
}

impl<R: RemoteStore, L: LocalRepository> DirectoryUploadUseCase<R, L> {
    pub fn new(remote_store: Arc<R>, local_repository: Arc<L>) -> Self {
        Self {
            remote_store,
            local_repository,
        }
    }

    /// フォルダを用意して子要素を列挙
    ///
    /// # Arguments
    ///
    /// * `container_id` - 親フォルダのID
    /// * `file` - ディレクトリの FileDescriptor
    ///
    /// # Returns
    ///
    /// フォルダと、そのフォルダへディスパッチすべき子要素
    ///
    /// # Errors
    ///
    /// リモート呼び出し、またはディレクトリの列挙に失敗した場合にエラーを返す
    pub async fn execute(
        &self,
        container_id: &str,
        file: &FileDescriptor,
    ) -> Result<DirectoryOutcome> {
        debug!("Create directory {}...", file.name());

        let (folder_id, created) = match self
            .remote_store
            .find_folder_by_name(container_id, file.name())
            .await?
        {
            Some(id) => {
                debug!("Folder '{}' already exists with ID: {}", file.name(), id);
                (id, false)
            }
            None => {
                let id = self
                    .remote_store
                    .create_folder(container_id, file.name())
                    .await?;
                info!("Created new folder '{}' with ID: {}", file.name(), id);
                (id, true)
            }
        };

        let children: Vec<FileDescriptor> = self
            .local_repository
            .list_entries(file.path())
            .await?
            .into_iter()
            .map(|path| file.child(path))
            .collect();

        debug!("{} entries in {}", children.len(), file.path().display());

        Ok(DirectoryOutcome {
            object: UploadedObject::new(file.name(), folder_id, Category::Directory),
            created,
            children,
        })
    }
}
