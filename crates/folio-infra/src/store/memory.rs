//! In-memory post store - the only backend; contents reset on restart.

use async_trait::async_trait;
use chrono::Duration;
use tokio::sync::RwLock;

use folio_core::domain::{ContentDefaults, Post};
use folio_core::error::RepoError;
use folio_core::ports::PostStore;

use crate::seed::demo_posts;

/// Append-only post collection behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Build a store from literal posts, in insertion order.
    ///
    /// Later duplicates of an id are dropped, and a post not newer than the
    /// ones before it is stamped just after them, as `append` does.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut stored: Vec<Post> = Vec::new();

        for mut post in posts {
            if stored.iter().any(|p| p.id == post.id) {
                tracing::warn!(post_id = %post.id, "Skipping duplicate seed post");
                continue;
            }
            stamp_after_newest(&stored, &mut post);
            stored.push(post);
        }

        Self {
            posts: RwLock::new(stored),
        }
    }

    /// Store pre-filled with the demo posts.
    pub fn seeded(defaults: &ContentDefaults) -> Self {
        let store = Self::with_posts(demo_posts(defaults));
        tracing::debug!("Post store seeded with demo content");
        store
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

// created_at must strictly increase in insertion order
fn stamp_after_newest(stored: &[Post], post: &mut Post) {
    if let Some(newest) = stored.iter().map(|p| p.created_at).max() {
        if post.created_at <= newest {
            post.created_at = newest + Duration::microseconds(1);
        }
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn all(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        let found = posts.iter().find(|p| p.id == id).cloned();
        tracing::debug!(post_id = %id, found = found.is_some(), "Finding post by id");
        Ok(found)
    }

    async fn append(&self, mut post: Post) -> Result<Post, RepoError> {
        // Single write lock covers the uniqueness check, the timestamp and the push
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint(format!(
                "post id {} already exists",
                post.id
            )));
        }

        stamp_after_newest(&posts, &mut post);
        posts.push(post.clone());
        tracing::debug!(post_id = %post.id, total = posts.len(), "Post appended");

        Ok(post)
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.posts.read().await.len())
    }
}
