//! Transkribus Upload Repository Implementation
//!
//! UploadRepositoryのTrpServer REST API実装

use async_trait::async_trait;
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::adapter::transkribus::client::TranskribusClient;
use crate::domain::entities::page::PageDescriptor;
use crate::domain::entities::session::{Credentials, SessionToken, UploadId};
use crate::domain::repositories::upload_repository::{UploadError, UploadRepository};

/// TrpServerアップロードリポジトリ
pub struct TranskribusUploadRepository {
    client: Arc<TranskribusClient>,
}

impl TranskribusUploadRepository {
    /// 新しいリポジトリを作成
    pub fn new(client: Arc<TranskribusClient>) -> Self {
        Self { client }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl UploadRepository for TranskribusUploadRepository {
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, UploadError> {
        info!("Logging in to {}", self.client.base_url());
        self.client.login(credentials).await
    }

    async fn create_upload(
        &self,
        session: &SessionToken,
        collection_id: &str,
        title: &str,
        pages: &[PageDescriptor],
    ) -> Result<UploadId, UploadError> {
        info!(
            "Creating upload '{}' in collection {} ({} pages)",
            title,
            collection_id,
            pages.len()
        );
        self.client
            .create_upload(session, collection_id, title, pages)
            .await
    }

    async fn upload_page(
        &self,
        session: &SessionToken,
        upload_id: &UploadId,
        page: &PageDescriptor,
        image_path: &Path,
        xml_path: &Path,
    ) -> Result<(), UploadError> {
        info!(
            "Uploading page {} ({}) to upload {}",
            page.page_nr, page.file_name, upload_id
        );
        self.client
            .upload_page(session, upload_id, page, image_path, xml_path)
            .await
    }
}
