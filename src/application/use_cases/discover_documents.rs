//! # Discover Documents Use Case
//!
//! ドキュメント発見ユースケース

use anyhow::Result;
use std::sync::Arc;

use crate::domain::entities::document::Document;
use crate::domain::repositories::document_repository::DocumentRepository;

/// ドキュメント発見ユースケース
///
/// ベースディレクトリ配下のドキュメントを発見する
pub struct DiscoverDocumentsUseCase<R: DocumentRepository> {
    document_repository: Arc<R>,
}

impl<R: DocumentRepository> DiscoverDocumentsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `document_repository` - ドキュメントリポジトリ
    pub fn new(document_repository: Arc<R>) -> Self {
        Self {
            document_repository,
        }
    }

    /// ドキュメントを発見する
    ///
    /// # Arguments
    ///
    /// * `base_dir` - ベースディレクトリのパス
    ///
    /// # Errors
    ///
    /// ディレクトリの読み取りに失敗した場合にエラーを返す
    pub async fn execute(&self, base_dir: &str) -> Result<Vec<Document>> {
        self.document_repository.discover_documents(base_dir).await
    }
}
