//! Configuration File
//!
//! JSON設定ファイルの読み込み

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::time::Duration;

use crate::application::dto::upload_config::UploadConfig;
use crate::domain::entities::session::Credentials;

pub const DEFAULT_API_BASE_URL: &str = "https://transkribus.eu/TrpServer/rest";
pub const DEFAULT_METADATA_DIR: &str = "page";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_image_extensions() -> Vec<String> {
    vec!["jpg".to_string()]
}

fn default_metadata_dir() -> String {
    DEFAULT_METADATA_DIR.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
    // Authentication
    pub username: String,
    pub password: String,

    // Upload target
    pub collection_id: String,
    pub base_directory: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    // Run policy
    #[serde(default = "default_true")]
    pub reuse_session: bool,
    #[serde(default)]
    pub isolate_document_failures: bool,

    // Directory layout
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,
    #[serde(default = "default_metadata_dir")]
    pub metadata_dir: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make every request fail
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("username", &self.username),
            ("password", &self.password),
            ("collection_id", &self.collection_id),
            ("base_directory", &self.base_directory),
            ("api_base_url", &self.api_base_url),
            ("metadata_dir", &self.metadata_dir),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                bail!("Config field `{}` must not be empty", name);
            }
        }

        if self.image_extensions.is_empty() {
            bail!("Config field `image_extensions` must list at least one extension");
        }

        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }

    pub fn upload_config(&self) -> UploadConfig {
        UploadConfig::new(
            self.collection_id.clone(),
            self.base_directory.clone(),
            self.reuse_session,
            self.isolate_document_failures,
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// password is never printed
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("password", &"***")
            .field("collection_id", &self.collection_id)
            .field("base_directory", &self.base_directory)
            .field("api_base_url", &self.api_base_url)
            .field("reuse_session", &self.reuse_session)
            .field("isolate_document_failures", &self.isolate_document_failures)
            .field("image_extensions", &self.image_extensions)
            .field("metadata_dir", &self.metadata_dir)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> String {
        let path = dir.path().join("pagesync.json");
        fs::write(&path, content).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_load_minimal_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
  "username": "user@example.com",
  "password": "secret",
  "collection_id": "12345",
  "base_directory": "/data/scans"
}"#,
        );

        let config = Config::load(&path).unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.reuse_session);
        assert!(!config.isolate_document_failures);
        assert_eq!(config.image_extensions, vec!["jpg".to_string()]);
        assert_eq!(config.metadata_dir, "page");
        assert_eq!(config.request_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
  "username": "user@example.com",
  "password": "secret",
  "collection_id": "12345",
  "base_directory": "~/scans",
  "api_base_url": "http://localhost:8080/rest",
  "reuse_session": false,
  "isolate_document_failures": true,
  "image_extensions": ["jpg", "tif"],
  "metadata_dir": "xml",
  "request_timeout_secs": 10
}"#,
        );

        let config = Config::load(&path).unwrap();
        let upload = config.upload_config();

        assert_eq!(upload.collection_id, "12345");
        assert_eq!(upload.base_directory, "~/scans");
        assert!(!upload.reuse_session);
        assert!(upload.isolate_document_failures);
        assert_eq!(config.image_extensions.len(), 2);
        assert_eq!(config.credentials().username, "user@example.com");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/pagesync.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_required_field() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "username": "user@example.com" }"#);

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_values() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
  "username": "user@example.com",
  "password": "",
  "collection_id": "12345",
  "base_directory": "/data/scans"
}"#,
        );

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
  "username": "user@example.com",
  "password": "secret",
  "collection_id": "12345",
  "base_directory": "/data/scans",
  "image_extensions": []
}"#,
        );

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
  "username": "user@example.com",
  "password": "hunter2",
  "collection_id": "12345",
  "base_directory": "/data/scans"
}"#,
        );

        let config = Config::load(&path).unwrap();
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
