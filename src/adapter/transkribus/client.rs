//! Transkribus HTTP Client
//!
//! TrpServer REST API へのHTTPアクセス

use anyhow::{Context, Result};
use log::debug;
use reqwest::header::COOKIE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use std::path::Path;
use std::time::Duration;

use super::models::{parse_session_id, parse_upload_id, CreateUploadRequest};
use crate::domain::entities::page::PageDescriptor;
use crate::domain::entities::session::{Credentials, SessionToken, UploadId};
use crate::domain::repositories::upload_repository::UploadError;

const OCTET_STREAM: &str = "application/octet-stream";

/// Build the session cookie header value
pub fn session_cookie(session: &SessionToken) -> String {
    format!("JSESSIONID={}", session.as_str())
}

/// Small async client for the TrpServer upload endpoints
pub struct TranskribusClient {
    client: Client,
    base_url: String,
}

impl TranskribusClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    pub fn uploads_url(&self) -> String {
        format!("{}/uploads", self.base_url)
    }

    pub fn upload_url(&self, upload_id: &UploadId) -> String {
        format!("{}/uploads/{}", self.base_url, upload_id.as_str())
    }

    /// POST /auth/login
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionToken, UploadError> {
        let response = self
            .client
            .post(self.login_url())
            .form(&[
                ("user", credentials.username.as_str()),
                ("pw", credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let (status, body) = read_response(response).await?;
        if status != StatusCode::OK {
            return Err(UploadError::Authentication {
                status: status.as_u16(),
                body,
            });
        }

        parse_session_id(&body).map(SessionToken::new)
    }

    /// POST /uploads?collId=<id>
    pub async fn create_upload(
        &self,
        session: &SessionToken,
        collection_id: &str,
        title: &str,
        pages: &[PageDescriptor],
    ) -> Result<UploadId, UploadError> {
        let request = CreateUploadRequest::new(title, pages);
        let response = self
            .client
            .post(self.uploads_url())
            .query(&[("collId", collection_id)])
            .header(COOKIE, session_cookie(session))
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let (status, body) = read_response(response).await?;
        match status {
            StatusCode::OK => parse_upload_id(&body).map(UploadId::new),
            StatusCode::UNAUTHORIZED => Err(UploadError::SessionExpired {
                status: status.as_u16(),
            }),
            _ => Err(UploadError::UploadCreation {
                status: status.as_u16(),
                body,
            }),
        }
    }

    /// PUT /uploads/<uploadId> with `img` and `xml` parts
    pub async fn upload_page(
        &self,
        session: &SessionToken,
        upload_id: &UploadId,
        page: &PageDescriptor,
        image_path: &Path,
        xml_path: &Path,
    ) -> Result<(), UploadError> {
        let form = Form::new()
            .part("img", file_part(image_path, &page.file_name).await?)
            .part("xml", file_part(xml_path, &page.page_xml_name).await?);

        let response = self
            .client
            .put(self.upload_url(upload_id))
            .header(COOKIE, session_cookie(session))
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let (status, body) = read_response(response).await?;
        match status {
            StatusCode::OK => Ok(()),
            StatusCode::UNAUTHORIZED => Err(UploadError::SessionExpired {
                status: status.as_u16(),
            }),
            _ => Err(UploadError::PageUpload {
                page_nr: page.page_nr,
                status: status.as_u16(),
                body,
            }),
        }
    }
}

/// Open a page file as a streamed multipart part
///
/// The handle is owned by the request body and closed when the request is dropped.
async fn file_part(path: &Path, file_name: &str) -> Result<Part, UploadError> {
    let io_error = |e: std::io::Error| UploadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let file = tokio::fs::File::open(path).await.map_err(io_error)?;
    let length = file.metadata().await.map_err(io_error)?.len();
    debug!("Streaming {} bytes from {}", length, path.display());

    Part::stream_with_length(file, length)
        .file_name(file_name.to_string())
        .mime_str(OCTET_STREAM)
        .map_err(transport_error)
}

async fn read_response(response: Response) -> Result<(StatusCode, String), UploadError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    debug!("Response {} ({} bytes)", status, body.len());
    Ok((status, body))
}

fn transport_error(e: reqwest::Error) -> UploadError {
    UploadError::Transport(e.to_string())
}
