//! # Upload Configuration DTO
//!
//! アップロード設定のData Transfer Object

/// アップロード設定
///
/// 1回の実行で変化しない読み取り専用の設定
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// アップロード先コレクションID
    pub collection_id: String,
    /// ドキュメントを探すベースディレクトリ
    pub base_directory: String,
    /// ドキュメント間でセッションを使い回すかどうか
    pub reuse_session: bool,
    /// ドキュメント単位の失敗を記録して次へ進むかどうか
    pub isolate_document_failures: bool,
}

impl UploadConfig {
    /// 新しいアップロード設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use pagesync::application::dto::upload_config::UploadConfig;
    ///
    /// let config = UploadConfig::new(
    ///     "12345".to_string(),
    ///     "/data/scans".to_string(),
    ///     true,             // セッションを使い回す
    ///     false,            // 最初の失敗で中断
    /// );
    ///
    /// assert_eq!(config.collection_id, "12345");
    /// assert!(config.reuse_session);
    /// assert!(!config.isolate_document_failures);
    /// ```
    pub fn new(
        collection_id: String,
        base_directory: String,
        reuse_session: bool,
        isolate_document_failures: bool,
    ) -> Self {
        Self {
            collection_id,
            base_directory,
            reuse_session,
            isolate_document_failures,
        }
    }
}
