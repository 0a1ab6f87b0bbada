//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **PageDescriptor**: 1ページ（画像 + メタデータ名）のバリューオブジェクト
//! - **Document**: 1ディレクトリに対応するドキュメント
//! - **SessionToken / UploadId / Credentials**: 認証とアップロードの識別子
//! - **RunReport**: 実行結果の集計

pub mod document;
pub mod page;
pub mod run_report;
pub mod session;
