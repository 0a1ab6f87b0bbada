//! Transkribus Wire Models
//!
//! リクエスト（JSON）とレスポンス（XML）の表現

use serde::{Deserialize, Serialize};

use crate::domain::entities::page::PageDescriptor;
use crate::domain::repositories::upload_repository::UploadError;

/// `POST /uploads` のリクエストボディ
#[derive(Debug, Serialize)]
pub struct CreateUploadRequest<'a> {
    pub md: DocumentMetadata<'a>,
    #[serde(rename = "pageList")]
    pub page_list: PageList<'a>,
}

#[derive(Debug, Serialize)]
pub struct DocumentMetadata<'a> {
    pub title: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PageList<'a> {
    pub pages: &'a [PageDescriptor],
}

impl<'a> CreateUploadRequest<'a> {
    pub fn new(title: &'a str, pages: &'a [PageDescriptor]) -> Self {
        Self {
            md: DocumentMetadata { title },
            page_list: PageList { pages },
        }
    }
}

/// `POST /auth/login` のレスポンス（`<trpUserLogin>`）
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// `POST /uploads` のレスポンス（`<trpUpload>`）
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    #[serde(rename = "uploadId")]
    pub upload_id: Option<String>,
}

/// ログインレスポンスから `sessionId` を取り出す
pub fn parse_session_id(body: &str) -> Result<String, UploadError> {
    let response: LoginResponse = quick_xml::de::from_str(body)
        .map_err(|e| UploadError::InvalidResponse(format!("login response: {}", e)))?;
    non_empty(response.session_id, "sessionId")
}

/// コンテナ作成レスポンスから `uploadId` を取り出す
pub fn parse_upload_id(body: &str) -> Result<String, UploadError> {
    let response: UploadResponse = quick_xml::de::from_str(body)
        .map_err(|e| UploadError::InvalidResponse(format!("upload response: {}", e)))?;
    non_empty(response.upload_id, "uploadId")
}

fn non_empty(value: Option<String>, element: &str) -> Result<String, UploadError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(UploadError::InvalidResponse(format!(
            "missing <{}> element",
            element
        ))),
    }
}
