//! # Document Repository Trait
//!
//! ローカルのドキュメントディレクトリの走査を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::document::Document;

/// ドキュメントリポジトリ
///
/// ベースディレクトリ配下のドキュメントの発見を担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// ドキュメントを発見する
    ///
    /// # Arguments
    ///
    /// * `base_dir` - ベースディレクトリのパス（ベース自身は含まない）
    ///
    /// # Returns
    ///
    /// 走査順のドキュメント。対象画像が無いディレクトリも空のドキュメントとして返す
    async fn discover_documents(&self, base_dir: &str) -> Result<Vec<Document>>;

    /// メタデータファイルが存在するかどうか
    async fn metadata_exists(&self, path: &Path) -> bool;
}
