//! Transkribus Adapter Modules
//!
//! TrpServer REST API 統合のためのアダプターモジュール

pub mod client;
pub mod models;
