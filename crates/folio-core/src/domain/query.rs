//! Filtering and pagination rules for post listings.

use serde::{Deserialize, Serialize};

use super::{ContentDefaults, Post};

/// Raw listing parameters as supplied by a caller. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

/// Compiled filter set. All present filters must match.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    category: Option<String>,
    tag: Option<String>,
    search: Option<String>,
}

impl PostQuery {
    pub fn from_params(params: &ListParams) -> Self {
        Self {
            category: params.category.clone(),
            tag: params.tag.clone(),
            search: params.search.as_deref().map(str::to_lowercase),
        }
    }

    pub fn matches(&self, post: &Post) -> bool {
        if let Some(category) = &self.category {
            if &post.category != category {
                return false;
            }
        }

        if let Some(tag) = &self.tag {
            if !post.has_tag(tag) {
                return false;
            }
        }

        match &self.search {
            Some(needle) => Self::text_contains(post, needle),
            None => true,
        }
    }

    // needle is already lowercased
    fn text_contains(post: &Post, needle: &str) -> bool {
        post.title.to_lowercase().contains(needle)
            || post.excerpt.to_lowercase().contains(needle)
            || post.content.to_lowercase().contains(needle)
            || post.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// A 1-based page request after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    /// Clamp raw inputs into a valid request: non-positive values become 1.
    pub fn clamped(page: Option<i64>, page_size: Option<i64>, defaults: &ContentDefaults) -> Self {
        let page = page.map(Self::at_least_one).unwrap_or(1);
        let page_size = page_size
            .map(Self::at_least_one)
            .unwrap_or(defaults.default_page_size)
            .max(1);

        Self { page, page_size }
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    fn at_least_one(value: i64) -> usize {
        usize::try_from(value.max(1)).unwrap_or(usize::MAX)
    }
}

/// One page of a sorted, filtered result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    /// Slice an already sorted result set. Pages past the end are empty.
    pub fn from_sorted(all: Vec<T>, pagination: Pagination) -> Self {
        let total_items = all.len();
        let total_pages = total_items.div_ceil(pagination.page_size);
        let items = all
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.page_size)
            .collect();

        Self {
            items,
            total_items,
            total_pages,
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostDraft;
    use chrono::Utc;

    fn post(title: &str, category: &str, tags: &[&str]) -> Post {
        let draft = PostDraft {
            title: title.to_string(),
            excerpt: "A short excerpt".to_string(),
            content: "<p>Body text</p>".to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        };
        Post::with_id(title, draft, &ContentDefaults::default(), Utc::now())
    }

    #[test]
    fn test_filters_compose_with_and() {
        let p = post("Rust in Production", "Systems", &["Rust", "Ops"]);

        let query = PostQuery::from_params(&ListParams {
            category: Some("Systems".to_string()),
            tag: Some("Rust".to_string()),
            ..Default::default()
        });
        assert!(query.matches(&p));

        let query = PostQuery::from_params(&ListParams {
            category: Some("Systems".to_string()),
            tag: Some("Go".to_string()),
            ..Default::default()
        });
        assert!(!query.matches(&p));
    }

    #[test]
    fn test_tag_filter_is_case_sensitive() {
        let p = post("Rust in Production", "Systems", &["Rust"]);
        let query = PostQuery::from_params(&ListParams {
            tag: Some("rust".to_string()),
            ..Default::default()
        });
        assert!(!query.matches(&p));
    }

    #[test]
    fn test_search_checks_every_text_field() {
        let p = post("Rust in Production", "Systems", &["Observability"]);

        for needle in ["PRODUCTION", "short exc", "body TEXT", "observ"] {
            let query = PostQuery::from_params(&ListParams {
                search: Some(needle.to_string()),
                ..Default::default()
            });
            assert!(query.matches(&p), "expected match for {needle}");
        }

        let query = PostQuery::from_params(&ListParams {
            search: Some("Systems".to_string()),
            ..Default::default()
        });
        assert!(!query.matches(&p), "category is not searched");
    }

    #[test]
    fn test_pagination_clamps() {
        let defaults = ContentDefaults::default();

        let p = Pagination::clamped(None, None, &defaults);
        assert_eq!((p.page, p.page_size), (1, defaults.default_page_size));

        let p = Pagination::clamped(Some(-3), Some(0), &defaults);
        assert_eq!((p.page, p.page_size), (1, 1));

        let p = Pagination::clamped(Some(2), Some(10_000), &defaults);
        assert_eq!((p.page, p.page_size), (2, 10_000));
    }

    #[test]
    fn test_page_slices() {
        let pagination = Pagination { page: 2, page_size: 2 };
        let page = Page::from_sorted(vec![1, 2, 3, 4, 5], pagination);

        assert_eq!(page.items, vec![3, 4]);
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let pagination = Pagination { page: 9, page_size: 2 };
        let page = Page::from_sorted(vec![1, 2, 3], pagination);

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 9);
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let pagination = Pagination { page: 1, page_size: 6 };
        let page: Page<i32> = Page::from_sorted(vec![], pagination);

        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
    }
}
