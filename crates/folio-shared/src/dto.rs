//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Query string for `GET /api/posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl ListPostsQuery {
    /// Treat `?category=` and friends as if the filter was not supplied.
    pub fn normalized(self) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            page: self.page,
            page_size: self.page_size,
            category: non_blank(self.category),
            tag: non_blank(self.tag),
            search: non_blank(self.search),
        }
    }
}

/// Query string for `GET /api/posts/{id}/related`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelatedQuery {
    pub limit: Option<usize>,
}

/// Request to publish a new post.
///
/// Every field is optional on the wire so that missing required fields are
/// reported together by the handler instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePostRequest {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub read_time: Option<String>,
}

impl CreatePostRequest {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("excerpt", &self.excerpt),
            ("content", &self.content),
            ("category", &self.category),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// A post as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Stored image value.
    pub image: String,
    /// `image` resolved against the public base URL.
    pub image_url: String,
    pub read_time: String,
    pub created_at: String,
}

/// One page of results plus its position in the full listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}
