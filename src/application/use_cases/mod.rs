//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverDocumentsUseCase**: ドキュメントディレクトリの発見
//! - **UploadDocumentsUseCase**: 認証・コンテナ作成・ページ送信

pub mod discover_documents;
pub mod upload_documents;
