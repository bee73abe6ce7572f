//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use folio_core::domain::ContentDefaults;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for relative image paths, e.g. `/` or `https://me.dev/portfolio/`.
    pub public_base_url: String,
    pub content: ContentDefaults,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fallback = ContentDefaults::default();

        let content = ContentDefaults {
            default_image: lookup("DEFAULT_BLOG_IMAGE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(fallback.default_image),
            default_read_time: lookup("DEFAULT_READ_TIME")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(fallback.default_read_time),
            // Format: PLACEHOLDER_HOSTS=placehold.co,via.placeholder.com
            placeholder_hosts: lookup("PLACEHOLDER_HOSTS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|h| !h.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or(fallback.placeholder_hosts),
            default_page_size: positive(&lookup, "DEFAULT_PAGE_SIZE")
                .unwrap_or(fallback.default_page_size),
            related_limit: positive(&lookup, "RELATED_LIMIT").unwrap_or(fallback.related_limit),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse(&lookup, "PORT").unwrap_or(8080),
            public_base_url: lookup("PUBLIC_BASE_URL").unwrap_or_else(|| "/".to_string()),
            content,
        }
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    parse(lookup, key).filter(|n: &usize| *n > 0)
}
