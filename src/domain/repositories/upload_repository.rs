//! # Upload Repository Trait
//!
//! リモートのドキュメント管理サービスへのアップロードを抽象化

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::page::PageDescriptor;
use crate::domain::entities::session::{Credentials, SessionToken, UploadId};

/// アップロード処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// ログインが拒否された
    #[error("Login failed: {status} - {body}")]
    Authentication { status: u16, body: String },

    /// アップロードコンテナの作成が拒否された
    #[error("Failed to create upload: {status}, {body}")]
    UploadCreation { status: u16, body: String },

    /// ページのアップロードが拒否された
    #[error("Failed to upload page {page_nr}: {status}, {body}")]
    PageUpload {
        page_nr: u32,
        status: u16,
        body: String,
    },

    /// セッションが失効している（再ログインで回復可能）
    #[error("Session expired: {status}")]
    SessionExpired { status: u16 },

    /// 成功ステータスだが期待した要素が無い
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 通信エラー
    #[error("Transport error: {0}")]
    Transport(String),

    /// ページファイルの読み込みエラー
    #[error("Failed to read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

/// アップロードリポジトリ
///
/// 認証・コンテナ作成・ページ送信の3ステップを担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UploadRepository: Send + Sync {
    /// ログインしてセッショントークンを取得
    ///
    /// # Errors
    ///
    /// 200以外のステータスの場合は `UploadError::Authentication`
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, UploadError>;

    /// アップロードコンテナを作成
    ///
    /// # Arguments
    ///
    /// * `session` - セッショントークン
    /// * `collection_id` - アップロード先コレクションID
    /// * `title` - ドキュメントタイトル
    /// * `pages` - 宣言するページリスト（順序がそのまま採用される）
    async fn create_upload(
        &self,
        session: &SessionToken,
        collection_id: &str,
        title: &str,
        pages: &[PageDescriptor],
    ) -> Result<UploadId, UploadError>;

    /// 1ページ分の画像とメタデータを送信
    ///
    /// # Arguments
    ///
    /// * `session` - セッショントークン
    /// * `upload_id` - コンテナID
    /// * `page` - ページ記述子
    /// * `image_path` - 画像ファイルのパス
    /// * `xml_path` - メタデータファイルのパス
    async fn upload_page(
        &self,
        session: &SessionToken,
        upload_id: &UploadId,
        page: &PageDescriptor,
        image_path: &Path,
        xml_path: &Path,
    ) -> Result<(), UploadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let auth = UploadError::Authentication {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert_eq!(auth.to_string(), "Login failed: 401 - Unauthorized");

        let page = UploadError::PageUpload {
            page_nr: 3,
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(page.to_string(), "Failed to upload page 3: 500, boom");

        let io = UploadError::Io {
            path: PathBuf::from("/scans/a.jpg"),
            message: "permission denied".to_string(),
        };
        assert_eq!(io.to_string(), "Failed to read /scans/a.jpg: permission denied");
    }
}
