//! # PageDescriptor Value Object
//!
//! ページ記述子のバリューオブジェクト

use serde::{Deserialize, Serialize};

/// メタデータファイルの拡張子
pub const METADATA_EXTENSION: &str = "xml";

/// ページ記述子
///
/// 1枚の画像ファイルと、それに対応するPAGE-XMLファイル名を表す。
/// アップロードコンテナ作成時にページリストとしてそのままJSONに載る。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    /// 画像ファイル名（拡張子付き、ディレクトリなし）
    pub file_name: String,
    /// 1始まりのページ番号
    pub page_nr: u32,
    /// 対応するメタデータファイル名（`<base name>.xml`）
    pub page_xml_name: String,
}

impl PageDescriptor {
    /// 新しいページ記述子を作成
    ///
    /// # Arguments
    ///
    /// * `file_name` - 画像ファイル名
    /// * `base_name` - 拡張子を除いたファイル名
    /// * `page_nr` - ページ番号
    pub fn new(file_name: impl Into<String>, base_name: &str, page_nr: u32) -> Self {
        Self {
            file_name: file_name.into(),
            page_nr,
            page_xml_name: format!("{}.{}", base_name, METADATA_EXTENSION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_descriptor_new() {
        let page = PageDescriptor::new("p1.jpg", "p1", 1);

        assert_eq!(page.file_name, "p1.jpg");
        assert_eq!(page.page_nr, 1);
        assert_eq!(page.page_xml_name, "p1.xml");
    }

    #[test]
    fn test_page_descriptor_serializes_camel_case() {
        let page = PageDescriptor::new("IMG1.JPG", "IMG1", 3);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "fileName": "IMG1.JPG",
                "pageNr": 3,
                "pageXmlName": "IMG1.xml"
            })
        );
    }
}
