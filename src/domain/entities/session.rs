//! # Session Value Objects
//!
//! 認証情報・セッショントークン・アップロードID

use std::fmt;

/// ログイン認証情報
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// パスワードはログに出さない
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// セッショントークン
///
/// ログインで発行される不透明な文字列。以降のリクエストに
/// `JSESSIONID` クッキーとして付与する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// アップロードコンテナのID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadId(String);

impl UploadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UploadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("user@example.com", "secret");
        let debug = format!("{:?}", creds);

        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_session_token_display() {
        let token = SessionToken::new("ABC123");
        assert_eq!(token.to_string(), "ABC123");
        assert_eq!(token.as_str(), "ABC123");
    }

    #[test]
    fn test_upload_id_display() {
        let id = UploadId::new("42");
        assert_eq!(id.to_string(), "42");
    }
}
