//! Adapter Layer
//!
//! 外部システム（TrpServer REST API, ファイルシステム）との統合

pub mod config;
pub mod repositories;
pub mod transkribus;
