//! # Run Report
//!
//! 1回のアップロード実行の結果を集計するバリューオブジェクト

use chrono::{DateTime, Utc};
use std::path::PathBuf;

use super::session::UploadId;

/// 1ページのアップロード結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// アップロード成功
    Uploaded { page_nr: u32 },
    /// メタデータファイルが無いため送信しなかった
    MissingMetadata { page_nr: u32, xml_path: PathBuf },
    /// サーバーまたはローカルI/Oで失敗した
    Failed { page_nr: u32, reason: String },
}

/// ドキュメントの処理状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentStatus {
    /// 対象画像が無く、通信せずにスキップした
    Skipped,
    /// コンテナ作成まで成功し、全ページを処理した
    Completed,
    /// 認証またはコンテナ作成で失敗した（ページ送信中の再ログイン失敗を含む）
    Failed(String),
}

/// ドキュメント単位の結果
#[derive(Debug, Clone)]
pub struct DocumentReport {
    pub name: String,
    pub status: DocumentStatus,
    pub upload_id: Option<UploadId>,
    pub pages: Vec<PageOutcome>,
}

impl DocumentReport {
    pub fn skipped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DocumentStatus::Skipped,
            upload_id: None,
            pages: Vec::new(),
        }
    }

    pub fn completed(name: impl Into<String>, upload_id: UploadId, pages: Vec<PageOutcome>) -> Self {
        Self {
            name: name.into(),
            status: DocumentStatus::Completed,
            upload_id: Some(upload_id),
            pages,
        }
    }

    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DocumentStatus::Failed(reason.into()),
            upload_id: None,
            pages: Vec::new(),
        }
    }

    /// コンテナ作成後に中断したドキュメント
    ///
    /// 作成済みのコンテナIDと、中断までに処理したページ結果を保持する
    pub fn interrupted(
        name: impl Into<String>,
        reason: impl Into<String>,
        upload_id: UploadId,
        pages: Vec<PageOutcome>,
    ) -> Self {
        Self {
            name: name.into(),
            status: DocumentStatus::Failed(reason.into()),
            upload_id: Some(upload_id),
            pages,
        }
    }

    /// アップロードに成功したページ数
    pub fn uploaded_pages(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| matches!(p, PageOutcome::Uploaded { .. }))
            .count()
    }

    /// メタデータ欠落でスキップしたページ数
    pub fn skipped_pages(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| matches!(p, PageOutcome::MissingMetadata { .. }))
            .count()
    }

    /// 失敗したページ数
    pub fn failed_pages(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| matches!(p, PageOutcome::Failed { .. }))
            .count()
    }
}

/// 実行全体の結果
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub documents: Vec<DocumentReport>,
}

impl RunReport {
    /// 新しい実行結果を作成（開始時刻は現在時刻）
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            started_at: Utc::now(),
            finished_at: None,
            documents: Vec::new(),
        }
    }

    pub fn push(&mut self, report: DocumentReport) {
        self.documents.push(report);
    }

    /// 終了時刻を記録
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn completed_documents(&self) -> usize {
        self.count_documents(|s| matches!(s, DocumentStatus::Completed))
    }

    pub fn skipped_documents(&self) -> usize {
        self.count_documents(|s| matches!(s, DocumentStatus::Skipped))
    }

    pub fn failed_documents(&self) -> usize {
        self.count_documents(|s| matches!(s, DocumentStatus::Failed(_)))
    }

    pub fn uploaded_pages(&self) -> usize {
        self.documents.iter().map(DocumentReport::uploaded_pages).sum()
    }

    pub fn skipped_pages(&self) -> usize {
        self.documents.iter().map(DocumentReport::skipped_pages).sum()
    }

    pub fn failed_pages(&self) -> usize {
        self.documents.iter().map(DocumentReport::failed_pages).sum()
    }

    fn count_documents(&self, pred: impl Fn(&DocumentStatus) -> bool) -> usize {
        self.documents.iter().filter(|d| pred(&d.status)).count()
    }
}
