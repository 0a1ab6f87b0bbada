//! # Page Listing Service
//!
//! ディレクトリ内のファイル名からページリストを組み立てるサービス

use std::path::Path;

use crate::domain::entities::page::PageDescriptor;

/// 処理済みを示すサフィックス
pub const DONE_MARKER_SUFFIX: &str = ".done";

/// ページリスト組み立てサービス
///
/// 1. `.done` で終わるファイルを除外
/// 2. ファイル名を辞書順にソート
/// 3. 画像拡張子（大文字小文字を区別しない）のファイルだけに 1 から番号を振る
pub struct PageListingService;

impl PageListingService {
    /// 処理済みマーカーかどうか
    pub fn is_done_marker(file_name: &str) -> bool {
        file_name.ends_with(DONE_MARKER_SUFFIX)
    }

    /// 画像ファイルかどうか
    ///
    /// # Arguments
    ///
    /// * `file_name` - ファイル名
    /// * `image_extensions` - 画像として扱う拡張子（ドットなし）
    pub fn is_image(file_name: &str, image_extensions: &[String]) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                image_extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }

    /// 拡張子を除いたファイル名
    ///
    /// 最後の拡張子のみ取り除く（`a.b.jpg` → `a.b`）
    pub fn base_name(file_name: &str) -> &str {
        Path::new(file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file_name)
    }

    /// ファイル名一覧からページリストを組み立てる
    ///
    /// # Arguments
    ///
    /// * `file_names` - ディレクトリ直下のファイル名
    /// * `image_extensions` - 画像として扱う拡張子
    ///
    /// # Returns
    ///
    /// ページ番号順のページ記述子（番号は 1..=N で欠番なし）
    pub fn build_page_list(
        file_names: Vec<String>,
        image_extensions: &[String],
    ) -> Vec<PageDescriptor> {
        let mut names: Vec<String> = file_names
            .into_iter()
            .filter(|name| !Self::is_done_marker(name))
            .collect();
        names.sort();

        names
            .into_iter()
            .filter(|name| Self::is_image(name, image_extensions))
            .enumerate()
            .map(|(i, name)| {
                let base = Self::base_name(&name).to_string();
                PageDescriptor::new(name, &base, i as u32 + 1)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpg() -> Vec<String> {
        vec!["jpg".to_string()]
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_done_marker() {
        assert!(PageListingService::is_done_marker("p1.jpg.done"));
        assert!(PageListingService::is_done_marker(".done"));
        assert!(!PageListingService::is_done_marker("p1.jpg"));
        assert!(!PageListingService::is_done_marker("done.jpg"));
    }

    #[test]
    fn test_is_image_case_insensitive() {
        assert!(PageListingService::is_image("a.jpg", &jpg()));
        assert!(PageListingService::is_image("IMG1.JPG", &jpg()));
        assert!(PageListingService::is_image("scan.JpG", &jpg()));
        assert!(!PageListingService::is_image("a.png", &jpg()));
        assert!(!PageListingService::is_image("a.xml", &jpg()));
        assert!(!PageListingService::is_image("jpg", &jpg()));
    }

    #[test]
    fn test_is_image_custom_extensions() {
        let exts = vec!["tif".to_string(), "PNG".to_string()];
        assert!(PageListingService::is_image("a.TIF", &exts));
        assert!(PageListingService::is_image("a.png", &exts));
        assert!(!PageListingService::is_image("a.jpg", &exts));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(PageListingService::base_name("p1.jpg"), "p1");
        assert_eq!(PageListingService::base_name("IMG1.JPG"), "IMG1");
        assert_eq!(PageListingService::base_name("a.b.jpg"), "a.b");
    }

    #[test]
    fn test_build_page_list_sorted_and_numbered() {
        let pages = PageListingService::build_page_list(
            names(&["b.jpg", "a.jpg", "c.jpg.done", "notes.txt"]),
            &jpg(),
        );

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], PageDescriptor::new("a.jpg", "a", 1));
        assert_eq!(pages[1], PageDescriptor::new("b.jpg", "b", 2));
    }

    #[test]
    fn test_build_page_list_metadata_name_ignores_extension_case() {
        let pages = PageListingService::build_page_list(names(&["IMG1.JPG"]), &jpg());

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].file_name, "IMG1.JPG");
        assert_eq!(pages[0].page_xml_name, "IMG1.xml");
    }

    #[test]
    fn test_build_page_list_numbers_are_gap_free() {
        let pages = PageListingService::build_page_list(
            names(&["p3.jpg", "readme.md", "p1.jpg", "p2.jpg.done", "p2.jpg"]),
            &jpg(),
        );

        let numbers: Vec<u32> = pages.iter().map(|p| p.page_nr).collect();
        let files: Vec<&str> = pages.iter().map(|p| p.file_name.as_str()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(files, vec!["p1.jpg", "p2.jpg", "p3.jpg"]);
    }

    #[test]
    fn test_build_page_list_lexicographic_not_numeric() {
        let pages =
            PageListingService::build_page_list(names(&["p10.jpg", "p2.jpg", "p1.jpg"]), &jpg());

        let files: Vec<&str> = pages.iter().map(|p| p.file_name.as_str()).collect();
        assert_eq!(files, vec!["p1.jpg", "p10.jpg", "p2.jpg"]);
    }

    #[test]
    fn test_build_page_list_empty() {
        let pages =
            PageListingService::build_page_list(names(&["p1.xml", "a.jpg.done"]), &jpg());
        assert!(pages.is_empty());
    }
}
