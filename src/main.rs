//! Pagesync - Scanned Document Uploader
//!
//! スキャン画像と PAGE-XML を Transkribus にアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use pagesync::adapter::config::Config;
use pagesync::driver::{Args, DocumentUploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration, then apply CLI overrides
    let mut config = Config::load(&args.config)?;
    args.apply_overrides(&mut config);
    config.validate()?;

    // Create workflow with injected dependencies
    let workflow = DocumentUploadWorkflow::new(config);

    workflow.execute(&args).await
}
