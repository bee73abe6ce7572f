use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Append-only post collection.
///
/// Implementations must reject a post whose id is already stored and keep
/// `created_at` strictly increasing in insertion order.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All stored posts, in insertion order.
    async fn all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its exact id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// Append a post and return the record as stored.
    async fn append(&self, post: Post) -> Result<Post, RepoError>;

    async fn count(&self) -> Result<usize, RepoError>;
}
