use url::Url;

use crate::error::Result;

pub const DEFAULT_MESSAGE_BASE_URL: &str = "https://translation.invalid/";
pub const DEFAULT_LOG_DIRECTIVE: &str = "translation_core=info";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base that message URLs are built on; its query is replaced.
    pub message_base_url: Url,

    /// Used when `RUST_LOG` is unset.
    pub log_directive: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base = lookup("TRANSLATION_MESSAGE_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MESSAGE_BASE_URL.to_string());

        Ok(Self {
            message_base_url: Url::parse(base.trim())?,
            log_directive: lookup("TRANSLATION_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string()),
        })
    }
}
