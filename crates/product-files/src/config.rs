//! # Upload Configuration
//!
//! Where product files are stored, where they are served from, and which MIME types
//! may be uploaded. Defaults match the `product_files` collection; each value can be
//! overridden from the environment:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PRODUCT_FILES_STATIC_URL` | `/product_files` |
//! | `PRODUCT_FILES_STATIC_DIR` | `product_files` |
//! | `PRODUCT_FILES_MIME_TYPES` | `image/*,font/*,application/postscript` |

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const STATIC_URL_VAR: &str = "PRODUCT_FILES_STATIC_URL";
pub const STATIC_DIR_VAR: &str = "PRODUCT_FILES_STATIC_DIR";
pub const MIME_TYPES_VAR: &str = "PRODUCT_FILES_MIME_TYPES";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadConfig {
    pub static_url: String,
    pub static_dir: String,
    /// Accepted MIME patterns; `type/*` accepts every subtype.
    pub mime_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            static_url: "/product_files".to_string(),
            static_dir: "product_files".to_string(),
            mime_types: vec![
                "image/*".to_string(),
                "font/*".to_string(),
                "application/postscript".to_string(),
            ],
        }
    }
}

impl UploadConfig {
    /// Defaults overridden by the `PRODUCT_FILES_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(STATIC_URL_VAR) {
            config.static_url = url;
        }
        if let Some(dir) = lookup(STATIC_DIR_VAR) {
            config.static_dir = dir;
        }
        if let Some(types) = lookup(MIME_TYPES_VAR) {
            config.mime_types = types
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
        }
        debug!(?config, "Upload config loaded");
        config
    }

    /// Whether any configured pattern accepts `mime_type`.
    pub fn accepts(&self, mime_type: &str) -> bool {
        self.mime_types
            .iter()
            .any(|pattern| mime_matches(pattern, mime_type))
    }

    /// Storage location of an uploaded file.
    pub fn storage_path(&self, filename: &str) -> String {
        join(&self.static_dir, filename)
    }

    /// Public URL of an uploaded file.
    pub fn url_for(&self, filename: &str) -> String {
        join(&self.static_url, filename)
    }
}

fn mime_matches(pattern: &str, mime_type: &str) -> bool {
    match pattern.strip_suffix("/*") {
        Some(top_level) => mime_type
            .split_once('/')
            .is_some_and(|(kind, subtype)| {
                kind.eq_ignore_ascii_case(top_level) && !subtype.is_empty()
            }),
        None => pattern.eq_ignore_ascii_case(mime_type),
    }
}

fn join(base: &str, filename: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns() {
        let config = UploadConfig::default();
        assert!(config.accepts("image/png"));
        assert!(config.accepts("IMAGE/SVG+XML"));
        assert!(config.accepts("font/woff2"));
        assert!(config.accepts("application/postscript"));
        assert!(!config.accepts("application/pdf"));
        assert!(!config.accepts("image/"));
        assert!(!config.accepts("imagepng"));
    }

    #[test]
    fn test_lookup_overrides() {
        let config = UploadConfig::from_lookup(|key| match key {
            STATIC_DIR_VAR => Some("/var/uploads/".to_string()),
            MIME_TYPES_VAR => Some("application/pdf, image/*,".to_string()),
            _ => None,
        });
        assert_eq!(config.static_url, "/product_files");
        assert_eq!(config.storage_path("a.png"), "/var/uploads/a.png");
        assert_eq!(config.url_for("a.png"), "/product_files/a.png");
        assert_eq!(config.mime_types, vec!["application/pdf", "image/*"]);
        assert!(config.accepts("application/pdf"));
        assert!(!config.accepts("font/ttf"));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: UploadConfig =
            serde_json::from_str(r#"{ "staticDir": "uploads" }"#).unwrap();
        assert_eq!(config.static_dir, "uploads");
        assert_eq!(config.static_url, "/product_files");
        assert_eq!(config.mime_types.len(), 3);
    }
}
