//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::file_document_repository::FileDocumentRepository;
use crate::adapter::repositories::transkribus_upload_repository::TranskribusUploadRepository;
use crate::adapter::transkribus::client::TranskribusClient;
use crate::application::use_cases::discover_documents::DiscoverDocumentsUseCase;
use crate::application::use_cases::upload_documents::UploadDocumentsUseCase;
use crate::domain::entities::document::Document;
use crate::domain::entities::page::PageDescriptor;
use crate::domain::entities::run_report::{DocumentStatus, RunReport};
use crate::domain::repositories::document_repository::DocumentRepository;

use super::cli::Args;

/// Format one declared page for dry-run output
pub fn describe_page(page: &PageDescriptor, has_xml: bool) -> String {
    let marker = if has_xml { "" } else { " [missing XML]" };
    format!(
        "{} → {} ({}){}",
        page.file_name, page.page_nr, page.page_xml_name, marker
    )
}

/// Document Upload Workflow
pub struct DocumentUploadWorkflow {
    config: Config,
    document_repository: Arc<FileDocumentRepository>,
    discover_use_case: DiscoverDocumentsUseCase<FileDocumentRepository>,
}

impl DocumentUploadWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let document_repository = Arc::new(FileDocumentRepository::new(
            config.image_extensions.clone(),
            config.metadata_dir.clone(),
        ));
        let discover_use_case = DiscoverDocumentsUseCase::new(document_repository.clone());

        Self {
            config,
            document_repository,
            discover_use_case,
        }
    }

    /// Execute the upload workflow
    pub async fn execute(&self, args: &Args) -> Result<()> {
        info!("Starting page uploader...");
        info!("Dry run: {}", args.dry_run);

        println!("✓ Using configuration:");
        println!("  API: {}", self.config.api_base_url);
        println!("  Collection: {}", self.config.collection_id);
        println!("  Base directory: {}", self.config.base_directory);
        println!("  User: {}", self.config.username);

        let upload_config = self.config.upload_config();
        let documents = self
            .discover_use_case
            .execute(&upload_config.base_directory)
            .await?;
        let with_pages = documents.iter().filter(|d| !d.is_empty()).count();
        println!(
            "✓ Found {} directories ({} with pages)",
            documents.len(),
            with_pages
        );

        if with_pages == 0 {
            println!("No documents to upload. Exiting.");
            return Ok(());
        }

        if args.dry_run {
            println!("✓ Dry-run mode (not actually uploading)");
            self.print_plan(&documents).await;
            return Ok(());
        }

        let client = Arc::new(TranskribusClient::new(
            &self.config.api_base_url,
            self.config.request_timeout(),
        )?);
        let upload_repository = Arc::new(TranskribusUploadRepository::new(client));
        let upload_use_case =
            UploadDocumentsUseCase::new(self.document_repository.clone(), upload_repository);

        let report = upload_use_case
            .execute(
                &documents,
                &upload_config,
                &self.config.credentials(),
            )
            .await?;

        print_summary(&report);
        println!("✓ Upload complete!");

        Ok(())
    }

    async fn print_plan(&self, documents: &[Document]) {
        for document in documents.iter().filter(|d| !d.is_empty()) {
            println!("  {} ({} pages)", document.name(), document.len());
            for page in document.pages() {
                let has_xml = self
                    .document_repository
                    .metadata_exists(&document.metadata_path(page))
                    .await;
                println!("    - {}", describe_page(page, has_xml));
            }
        }
    }
}

fn print_summary(report: &RunReport) {
    println!("✓ Run {} finished", report.run_id);
    println!(
        "  Documents: {} completed, {} skipped, {} failed",
        report.completed_documents(),
        report.skipped_documents(),
        report.failed_documents()
    );
    println!(
        "  Pages: {} uploaded, {} missing XML, {} failed",
        report.uploaded_pages(),
        report.skipped_pages(),
        report.failed_pages()
    );
    for document in &report.documents {
        if let DocumentStatus::Failed(reason) = &document.status {
            match &document.upload_id {
                Some(upload_id) => println!(
                    "  ✗ {}: {} (upload {} incomplete, {} pages uploaded)",
                    document.name,
                    reason,
                    upload_id,
                    document.uploaded_pages()
                ),
                None => println!("  ✗ {}: {}", document.name, reason),
            }
        }
    }
    if let Some(finished_at) = report.finished_at {
        let elapsed = finished_at - report.started_at;
        info!("Run took {} ms", elapsed.num_milliseconds());
    }
}
