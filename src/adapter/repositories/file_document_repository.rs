//! File Document Repository Implementation
//!
//! DocumentRepositoryのファイルシステム実装

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::entities::document::Document;
use crate::domain::repositories::document_repository::DocumentRepository;
use crate::domain::services::page_listing::PageListingService;

/// ファイルシステムベースのドキュメントリポジトリ
pub struct FileDocumentRepository {
    image_extensions: Vec<String>,
    metadata_dir: String,
}

impl FileDocumentRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `image_extensions` - 画像として扱う拡張子
    /// * `metadata_dir` - メタデータを格納するサブディレクトリ名
    pub fn new(image_extensions: Vec<String>, metadata_dir: impl Into<String>) -> Self {
        Self {
            image_extensions,
            metadata_dir: metadata_dir.into(),
        }
    }

    /// ドキュメントを発見する（内部実装）
    fn discover_documents_internal(
        base_dir: &str,
        image_extensions: &[String],
        metadata_dir: &str,
    ) -> Result<Vec<Document>> {
        let expanded_path = shellexpand::tilde(base_dir);
        let base_dir = PathBuf::from(expanded_path.as_ref());

        if !base_dir.is_dir() {
            warn!("Base directory does not exist: {}", base_dir.display());
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();

        for entry in WalkDir::new(&base_dir)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
        {
            if !entry.file_type().is_dir() {
                continue;
            }

            let dir = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let file_names = Self::list_file_names(dir);
            let pages = PageListingService::build_page_list(file_names, image_extensions);

            documents.push(Document::new(name, dir, metadata_dir, pages));
        }

        info!(
            "Found {} directories ({} with pages) in {}",
            documents.len(),
            documents.iter().filter(|d| !d.is_empty()).count(),
            base_dir.display()
        );

        Ok(documents)
    }

    /// ディレクトリ直下の通常ファイル名を列挙する
    ///
    /// 読み込めないディレクトリは警告を出して空として扱う
    fn list_file_names(dir: &Path) -> Vec<String> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Skipping unreadable directory {}: {}", dir.display(), err);
                return Vec::new();
            }
        };

        let mut file_names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable entry in {}: {}", dir.display(), err);
                    continue;
                }
            };
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => file_names.push(name),
                Err(name) => warn!("Skipping non UTF-8 file name: {:?}", name),
            }
        }

        file_names
    }
}

#[async_trait]
impl DocumentRepository for FileDocumentRepository {
    async fn discover_documents(&self, base_dir: &str) -> Result<Vec<Document>> {
        // ディレクトリ走査はブロッキングなので spawn_blocking でラップ
        let base_dir = base_dir.to_string();
        let image_extensions = self.image_extensions.clone();
        let metadata_dir = self.metadata_dir.clone();
        tokio::task::spawn_blocking(move || {
            Self::discover_documents_internal(&base_dir, &image_extensions, &metadata_dir)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn metadata_exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }
}
