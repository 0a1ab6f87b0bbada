//! # Domain Services
//!
//! エンティティに属さないビジネスルール
//!
//! - **PageListingService**: ファイル名一覧からページリストを組み立てる

pub mod page_listing;
