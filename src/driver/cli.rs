//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::adapter::config::Config;

/// スキャン画像とPAGE-XMLをTranskribusにアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "pagesync")]
#[command(about = "Upload scanned documents and PAGE-XML to Transkribus", long_about = None)]
pub struct Args {
    /// Dry run mode - list documents and pages without uploading
    #[arg(long)]
    pub dry_run: bool,

    /// Record document-level failures and continue with the next document
    #[arg(long)]
    pub isolate_failures: bool,

    /// Override the base directory from the config file
    #[arg(long)]
    pub base_dir: Option<String>,

    /// Override the collection ID from the config file
    #[arg(long)]
    pub collection_id: Option<String>,

    /// Config file path
    #[arg(short, long, default_value = "./pagesync.json")]
    pub config: String,
}

impl Args {
    /// Apply command line overrides on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_dir) = &self.base_dir {
            config.base_directory = base_dir.clone();
        }
        if let Some(collection_id) = &self.collection_id {
            config.collection_id = collection_id.clone();
        }
        if self.isolate_failures {
            config.isolate_document_failures = true;
        }
    }
}
