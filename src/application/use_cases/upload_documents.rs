//! # Upload Documents Use Case
//!
//! ドキュメントのアップロードユースケース
//!
//! ドキュメントごとに「認証 → コンテナ作成 → ページ送信 × N」を順番に実行する。
//! 認証とコンテナ作成の失敗はドキュメント単位、ページ送信の失敗はページ単位で扱う。

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::sync::Arc;

use crate::application::dto::upload_config::UploadConfig;
use crate::domain::entities::document::Document;
use crate::domain::entities::page::PageDescriptor;
use crate::domain::entities::run_report::{DocumentReport, PageOutcome, RunReport};
use crate::domain::entities::session::{Credentials, SessionToken, UploadId};
use crate::domain::repositories::document_repository::DocumentRepository;
use crate::domain::repositories::upload_repository::{UploadError, UploadRepository};

/// ドキュメント処理の失敗
///
/// コンテナ作成後に中断した場合は、作成済みのコンテナと処理済みページを保持する
struct DocumentFailure {
    error: UploadError,
    upload_id: Option<UploadId>,
    pages: Vec<PageOutcome>,
}

impl From<UploadError> for DocumentFailure {
    fn from(error: UploadError) -> Self {
        Self {
            error,
            upload_id: None,
            pages: Vec::new(),
        }
    }
}

/// ドキュメントアップロードユースケース
pub struct UploadDocumentsUseCase<D: DocumentRepository, U: UploadRepository> {
    document_repository: Arc<D>,
    upload_repository: Arc<U>,
}

impl<D: DocumentRepository, U: UploadRepository> UploadDocumentsUseCase<D, U> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `document_repository` - メタデータの存在確認に使うドキュメントリポジトリ
    /// * `upload_repository` - アップロードリポジトリ
    pub fn new(document_repository: Arc<D>, upload_repository: Arc<U>) -> Self {
        Self {
            document_repository,
            upload_repository,
        }
    }

    /// ドキュメントを順番にアップロードする
    ///
    /// # Arguments
    ///
    /// * `documents` - 走査順のドキュメント
    /// * `config` - アップロード設定
    /// * `credentials` - ログイン認証情報
    ///
    /// # Returns
    ///
    /// 実行結果
    ///
    /// # Errors
    ///
    /// `isolate_document_failures` が無効な場合、最初の認証失敗または
    /// コンテナ作成失敗でエラーを返す。ページ送信中の再ログイン失敗も同様。
    /// 有効な場合は作成済みコンテナと処理済みページを結果に残して次へ進む
    pub async fn execute(
        &self,
        documents: &[Document],
        config: &UploadConfig,
        credentials: &Credentials,
    ) -> Result<RunReport> {
        let mut report = RunReport::new(uuid::Uuid::new_v4().to_string());
        let mut session: Option<SessionToken> = None;

        info!(
            "Run {}: {} directories to process",
            report.run_id,
            documents.len()
        );

        for document in documents {
            println!("Processing directory {}...", document.name());

            if document.is_empty() {
                debug!("No images found in {}", document.dir().display());
                report.push(DocumentReport::skipped(document.name()));
                continue;
            }

            if !config.reuse_session {
                session = None;
            }

            match self
                .upload_document(document, config, credentials, &mut session)
                .await
            {
                Ok(doc_report) => report.push(doc_report),
                Err(failure) if config.isolate_document_failures => {
                    let reason = failure.error.to_string();
                    println!("✗ Document {} failed: {}", document.name(), reason);
                    warn!("Document {} failed: {}", document.name(), reason);
                    report.push(match failure.upload_id {
                        Some(upload_id) => DocumentReport::interrupted(
                            document.name(),
                            reason,
                            upload_id,
                            failure.pages,
                        ),
                        None => DocumentReport::failed(document.name(), reason),
                    });
                }
                Err(failure) => {
                    let context = match &failure.upload_id {
                        Some(upload_id) => format!(
                            "Failed to process document {} (upload {} incomplete, {} of {} pages processed)",
                            document.name(),
                            upload_id,
                            failure.pages.len(),
                            document.len()
                        ),
                        None => format!("Failed to process document {}", document.name()),
                    };
                    return Err(failure.error).context(context);
                }
            }
        }

        report.finish();
        Ok(report)
    }

    /// 1ドキュメントをアップロード
    async fn upload_document(
        &self,
        document: &Document,
        config: &UploadConfig,
        credentials: &Credentials,
        session: &mut Option<SessionToken>,
    ) -> Result<DocumentReport, DocumentFailure> {
        let upload_id = self
            .create_upload(document, config, credentials, session)
            .await?;
        println!(
            "✓ Created upload {} for {} ({} pages)",
            upload_id,
            document.name(),
            document.len()
        );

        let mut outcomes = Vec::with_capacity(document.len());
        for page in document.pages() {
            match self
                .upload_page(document, page, &upload_id, credentials, session)
                .await
            {
                Ok(outcome) => outcomes.push(outcome),
                Err(error) => {
                    return Err(DocumentFailure {
                        error,
                        upload_id: Some(upload_id),
                        pages: outcomes,
                    })
                }
            }
        }

        Ok(DocumentReport::completed(
            document.name(),
            upload_id,
            outcomes,
        ))
    }

    /// 有効なセッションを返す（無ければログインする）
    async fn ensure_session(
        &self,
        session: &mut Option<SessionToken>,
        credentials: &Credentials,
    ) -> Result<SessionToken, UploadError> {
        if let Some(token) = session {
            return Ok(token.clone());
        }

        let token = self.upload_repository.login(credentials).await?;
        info!("Logged in as {}", credentials.username);
        *session = Some(token.clone());
        Ok(token)
    }

    /// セッションを破棄して再ログインする
    async fn renew_session(
        &self,
        session: &mut Option<SessionToken>,
        credentials: &Credentials,
        status: u16,
    ) -> Result<SessionToken, UploadError> {
        warn!("Session expired ({}), logging in again", status);
        *session = None;
        self.ensure_session(session, credentials).await
    }

    async fn create_upload(
        &self,
        document: &Document,
        config: &UploadConfig,
        credentials: &Credentials,
        session: &mut Option<SessionToken>,
    ) -> Result<UploadId, UploadError> {
        let token = self.ensure_session(session, credentials).await?;
        let result = self
            .upload_repository
            .create_upload(
                &token,
                &config.collection_id,
                document.name(),
                document.pages(),
            )
            .await;

        let status = match result {
            Err(UploadError::SessionExpired { status }) => status,
            other => return other,
        };

        let token = self.renew_session(session, credentials, status).await?;
        self.upload_repository
            .create_upload(
                &token,
                &config.collection_id,
                document.name(),
                document.pages(),
            )
            .await
            .map_err(|e| match e {
                UploadError::SessionExpired { status } => UploadError::UploadCreation {
                    status,
                    body: "session expired again after re-login".to_string(),
                },
                other => other,
            })
    }

    /// 1ページを送信する
    ///
    /// メタデータが無い場合は送信せずにスキップする。
    /// 認証失敗以外のエラーはページ単位の結果として返す
    async fn upload_page(
        &self,
        document: &Document,
        page: &PageDescriptor,
        upload_id: &UploadId,
        credentials: &Credentials,
        session: &mut Option<SessionToken>,
    ) -> Result<PageOutcome, UploadError> {
        let image_path = document.image_path(page);
        let xml_path = document.metadata_path(page);

        if !self.document_repository.metadata_exists(&xml_path).await {
            println!("XML file not found: {}", xml_path.display());
            return Ok(PageOutcome::MissingMetadata {
                page_nr: page.page_nr,
                xml_path,
            });
        }

        let token = self.ensure_session(session, credentials).await?;
        let mut result = self
            .upload_repository
            .upload_page(&token, upload_id, page, &image_path, &xml_path)
            .await;

        if let Err(UploadError::SessionExpired { status }) = &result {
            let token = self.renew_session(session, credentials, *status).await?;
            result = self
                .upload_repository
                .upload_page(&token, upload_id, page, &image_path, &xml_path)
                .await;
        }

        match result {
            Ok(()) => {
                println!("✓ Page {} uploaded successfully.", page.page_nr);
                Ok(PageOutcome::Uploaded {
                    page_nr: page.page_nr,
                })
            }
            Err(e) => {
                let reason = match &e {
                    UploadError::PageUpload { .. } => e.to_string(),
                    other => format!("Failed to upload page {}: {}", page.page_nr, other),
                };
                println!("✗ {}", reason);
                Ok(PageOutcome::Failed {
                    page_nr: page.page_nr,
                    reason,
                })
            }
        }
    }
}
