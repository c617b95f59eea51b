//! # UploadedObject Value Object
//!
//! アップロード済みリモートオブジェクト

use super::category::Category;

/// アップロード済みリモートオブジェクト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedObject {
    /// リモート上の表示名
    pub name: String,
    /// リモートストアが割り当てたID
    pub id: String,
    pub category: Category,
}

impl UploadedObject {
    pub fn new(name: impl Into<String>, id: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            category,
        }
    }

    /// ブラウザで開くためのURL
    ///
    /// # 例
    ///
    /// ```
    /// use gpush::domain::entities::category::Category;
    /// use gpush::domain::entities::uploaded_object::UploadedObject;
    ///
    /// let sheet = UploadedObject::new("data.csv", "abc123", Category::Spreadsheet);
    /// assert_eq!(sheet.web_url(), "https://docs.google.com/spreadsheets/d/abc123/");
    ///
    /// let file = UploadedObject::new("photo.png", "xyz789", Category::Generic);
    /// assert_eq!(file.web_url(), "https://drive.google.com/file/d/xyz789/view");
    /// ```
    pub fn web_url(&self) -> String {
        match self.category {
            Category::Spreadsheet => format!("https://docs.google.com/spreadsheets/d/{}/", self.id),
            Category::Directory => format!("https://drive.google.com/drive/folders/{}", self.id),
            Category::Generic => format!("https://drive.google.com/file/d/{}/view", self.id),
        }
    }
}
