use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ContentDefaults;

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Rendered verbatim by the presentation layer, may contain markup.
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
    pub read_time: String,
    pub created_at: DateTime<Utc>,
}

/// A post as submitted by a caller, before an id and timestamp are assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub read_time: Option<String>,
}

impl Post {
    /// Create a new post from a draft with a generated id and the current time.
    pub fn new(draft: PostDraft, defaults: &ContentDefaults) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), draft, defaults, Utc::now())
    }

    /// Create a post with a known id and timestamp (seed data, imports).
    pub fn with_id(
        id: impl Into<String>,
        draft: PostDraft,
        defaults: &ContentDefaults,
        created_at: DateTime<Utc>,
    ) -> Self {
        let image = defaults.image_or_default(draft.image.as_deref());
        let read_time = defaults.read_time_or_default(draft.read_time.as_deref());

        Self {
            id: id.into(),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            category: draft.category,
            tags: draft.tags,
            image,
            read_time,
            created_at,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// True when the two posts have at least one tag in common.
    pub fn shares_tag_with(&self, other: &Post) -> bool {
        self.tags.iter().any(|t| other.has_tag(t))
    }
}

/// Order posts newest first. Posts with equal timestamps keep the later
/// inserted one first, so the input is expected in insertion order.
pub fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
    posts.reverse();
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    posts
}
