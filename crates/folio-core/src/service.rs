//! Content query service - the read/append API over the post store.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::{ContentDefaults, ListParams, Page, Pagination, Post, PostDraft, PostQuery, newest_first};
use crate::error::DomainError;
use crate::ports::PostStore;

/// Answers filtered, paginated queries over an injected [`PostStore`] and
/// accepts new drafts into it.
#[derive(Clone)]
pub struct ContentQueryService {
    store: Arc<dyn PostStore>,
    defaults: Arc<ContentDefaults>,
}

impl ContentQueryService {
    pub fn new(store: Arc<dyn PostStore>, defaults: ContentDefaults) -> Self {
        Self {
            store,
            defaults: Arc::new(defaults),
        }
    }

    pub fn defaults(&self) -> &ContentDefaults {
        &self.defaults
    }

    /// List posts newest first, filtered and paginated.
    ///
    /// Pagination inputs are clamped rather than rejected; a page past the
    /// last one is returned empty.
    pub async fn list(&self, params: &ListParams) -> Result<Page<Post>, DomainError> {
        let query = PostQuery::from_params(params);
        let pagination = Pagination::clamped(params.page, params.page_size, &self.defaults);

        let matching: Vec<Post> = newest_first(self.store.all().await?)
            .into_iter()
            .filter(|post| query.matches(post))
            .collect();

        Ok(Page::from_sorted(matching, pagination))
    }

    /// Distinct categories, sorted.
    pub async fn list_categories(&self) -> Result<Vec<String>, DomainError> {
        let categories: BTreeSet<String> = self
            .store
            .all()
            .await?
            .into_iter()
            .map(|post| post.category)
            .collect();

        Ok(categories.into_iter().collect())
    }

    /// Distinct tags across all posts, sorted.
    pub async fn list_tags(&self) -> Result<Vec<String>, DomainError> {
        let tags: BTreeSet<String> = self
            .store
            .all()
            .await?
            .into_iter()
            .flat_map(|post| post.tags)
            .collect();

        Ok(tags.into_iter().collect())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Post, DomainError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Post",
                id: id.to_string(),
            })
    }

    /// Posts sharing at least one tag with `id`, newest first.
    pub async fn related(&self, id: &str, limit: Option<usize>) -> Result<Vec<Post>, DomainError> {
        let current = self.get_by_id(id).await?;
        let limit = limit.unwrap_or(self.defaults.related_limit);

        let related = newest_first(self.store.all().await?)
            .into_iter()
            .filter(|post| post.id != current.id && post.shares_tag_with(&current))
            .take(limit)
            .collect();

        Ok(related)
    }

    /// Store a new post. Field contents are not validated here.
    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let post = Post::new(draft, &self.defaults);
        Ok(self.store.append(post).await?)
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.store.count().await?)
    }
}
