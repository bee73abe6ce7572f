//! Fallback values applied when a post is created, and paging limits.

/// Image shown when a post has none (or only a placeholder).
pub const DEFAULT_IMAGE: &str = "/images/profile.jpg";
pub const DEFAULT_READ_TIME: &str = "5 min read";
pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const RELATED_LIMIT: usize = 3;

/// Content defaults shared by the create path and the query path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDefaults {
    pub default_image: String,
    pub default_read_time: String,
    /// Hosts whose images are stand-ins and get replaced by `default_image`.
    pub placeholder_hosts: Vec<String>,
    pub default_page_size: usize,
    pub related_limit: usize,
}

impl Default for ContentDefaults {
    fn default() -> Self {
        Self {
            default_image: DEFAULT_IMAGE.to_string(),
            default_read_time: DEFAULT_READ_TIME.to_string(),
            placeholder_hosts: vec!["placehold.co".to_string()],
            default_page_size: DEFAULT_PAGE_SIZE,
            related_limit: RELATED_LIMIT,
        }
    }
}

impl ContentDefaults {
    /// Check whether an image URL points at one of the placeholder hosts.
    pub fn is_placeholder(&self, image: &str) -> bool {
        let lowered = image.trim().to_lowercase();
        let Some(rest) = lowered
            .strip_prefix("https://")
            .or_else(|| lowered.strip_prefix("http://"))
        else {
            return false;
        };

        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        let host = authority.split(':').next().unwrap_or_default();

        self.placeholder_hosts.iter().any(|placeholder| {
            let placeholder = placeholder.to_lowercase();
            host == placeholder || host.ends_with(&format!(".{}", placeholder))
        })
    }

    /// Keep the caller's value as given unless it is blank or a placeholder.
    pub fn image_or_default(&self, image: Option<&str>) -> String {
        match image {
            Some(image) if !image.trim().is_empty() && !self.is_placeholder(image) => {
                image.to_string()
            }
            _ => self.default_image.clone(),
        }
    }

    pub fn read_time_or_default(&self, read_time: Option<&str>) -> String {
        match read_time {
            Some(read_time) if !read_time.trim().is_empty() => read_time.to_string(),
            _ => self.default_read_time.clone(),
        }
    }

    /// Turn a stored image value into a URL the browser can load.
    ///
    /// Absolute `http(s)` URLs pass through, blank values fall back to the
    /// default image and relative paths are joined onto `base_url`.
    pub fn resolve_image_url(&self, image: &str, base_url: &str) -> String {
        let image = match image.trim() {
            "" => self.default_image.as_str(),
            trimmed => trimmed,
        };

        if image.starts_with("http://") || image.starts_with("https://") {
            return image.to_string();
        }

        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            image.trim_start_matches('/')
        )
    }
}
