//! # Document Entity
//!
//! ドキュメント（1ディレクトリ = 1アップロード）のエンティティ

use std::path::{Path, PathBuf};

use super::page::PageDescriptor;

/// ドキュメント
///
/// ベースディレクトリ配下の1ディレクトリに対応する。
/// 画像はディレクトリ直下、メタデータは `metadata_dir` 配下に置かれる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    dir: PathBuf,
    metadata_dir: PathBuf,
    pages: Vec<PageDescriptor>,
}

impl Document {
    /// 新しいドキュメントを作成
    ///
    /// # Arguments
    ///
    /// * `name` - ドキュメント名（ディレクトリ名）
    /// * `dir` - ドキュメントディレクトリのパス
    /// * `metadata_dir_name` - メタデータを格納するサブディレクトリ名
    /// * `pages` - ページ番号順のページ記述子
    pub fn new(
        name: impl Into<String>,
        dir: impl Into<PathBuf>,
        metadata_dir_name: &str,
        pages: Vec<PageDescriptor>,
    ) -> Self {
        let dir = dir.into();
        let metadata_dir = dir.join(metadata_dir_name);
        Self {
            name: name.into(),
            dir,
            metadata_dir,
            pages,
        }
    }

    /// ドキュメント名（アップロード時のタイトル）
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn metadata_dir(&self) -> &Path {
        &self.metadata_dir
    }

    pub fn pages(&self) -> &[PageDescriptor] {
        &self.pages
    }

    /// ページ数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// アップロード対象のページがないかどうか
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// ページの画像ファイルパス
    pub fn image_path(&self, page: &PageDescriptor) -> PathBuf {
        self.dir.join(&page.file_name)
    }

    /// ページのメタデータファイルパス
    pub fn metadata_path(&self, page: &PageDescriptor) -> PathBuf {
        self.metadata_dir.join(&page.page_xml_name)
    }
}
