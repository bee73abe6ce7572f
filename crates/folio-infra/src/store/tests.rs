#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use folio_core::domain::{ContentDefaults, ListParams, Post, PostDraft};
    use folio_core::error::RepoError;
    use folio_core::ports::PostStore;
    use folio_core::{ContentQueryService, DomainError};

    use crate::store::InMemoryPostStore;

    fn seeded_service() -> ContentQueryService {
        let defaults = ContentDefaults::default();
        let store = Arc::new(InMemoryPostStore::seeded(&defaults));
        ContentQueryService::new(store, defaults)
    }

    fn draft(title: &str, category: &str, tags: &[&str]) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            excerpt: format!("Excerpt for {}", title),
            content: format!("<p>Content for {}</p>", title),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: Some("/images/blog/threejs.jpg".to_string()),
            read_time: Some("4 min read".to_string()),
        }
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_seed_scenario() {
        let service = seeded_service();

        let page = service
            .list(&ListParams {
                category: Some("Web Development".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&page.items), vec!["2"]);

        let page = service
            .list(&ListParams {
                tag: Some("AI".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&page.items), vec!["1"]);

        let page = service
            .list(&ListParams {
                page: Some(2),
                page_size: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&page.items), vec!["2"]);
        assert_eq!(page.total_items, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 2);
    }

    #[tokio::test]
    async fn test_list_sorted_newest_first() {
        let service = seeded_service();
        service.create(draft("First", "Notes", &[])).await.unwrap();
        service.create(draft("Second", "Notes", &[])).await.unwrap();
        service.create(draft("Third", "Notes", &[])).await.unwrap();

        let page = service.list(&ListParams::default()).await.unwrap();
        let titles: Vec<_> = page.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles[..3], ["Third", "Second", "First"]);

        for pair in page.items.windows(2) {
            assert!(pair[0].created_at > pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_pages_cover_result_set() {
        let service = seeded_service();
        for i in 0..9 {
            service
                .create(draft(&format!("Post {}", i), "Notes", &["Rust"]))
                .await
                .unwrap();
        }

        let full = service
            .list(&ListParams {
                page_size: Some(50),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(full.total_items, 11);

        let first = service
            .list(&ListParams {
                page_size: Some(4),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(first.total_pages, 3);

        let mut collected = Vec::new();
        for page_no in 1..=first.total_pages {
            let page = service
                .list(&ListParams {
                    page: Some(page_no as i64),
                    page_size: Some(4),
                    ..Default::default()
                })
                .await
                .unwrap();
            assert!(page.items.len() <= 4);
            collected.extend(page.items);
        }

        assert_eq!(ids(&collected), ids(&full.items));
        let unique: HashSet<_> = collected.iter().map(|p| p.id.clone()).collect();
        assert_eq!(unique.len(), collected.len());
    }

    #[tokio::test]
    async fn test_large_page_size_is_not_capped() {
        let defaults = ContentDefaults::default();
        let service = ContentQueryService::new(Arc::new(InMemoryPostStore::new()), defaults);
        for i in 0..60 {
            service
                .create(draft(&format!("Post {}", i), "Notes", &[]))
                .await
                .unwrap();
        }

        let page = service
            .list(&ListParams {
                page_size: Some(100),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 60);
        assert_eq!(page.total_items, 60);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_size, 100);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let service = seeded_service();
        let page = service
            .list(&ListParams {
                page: Some(7),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 2);
        assert_eq!(page.page, 7);
    }

    #[tokio::test]
    async fn test_non_positive_pagination_is_clamped() {
        let service = seeded_service();
        let page = service
            .list(&ListParams {
                page: Some(0),
                page_size: Some(-5),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 1);
        assert_eq!(ids(&page.items), vec!["1"]);
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty() {
        let service = seeded_service();
        let page = service
            .list(&ListParams {
                category: Some("Cooking".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let service = seeded_service();

        for needle in ["Visual Speech", "visual sp", "AL SPEE", "deep learning"] {
            let page = service
                .list(&ListParams {
                    search: Some(needle.to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();
            assert_eq!(ids(&page.items), vec!["1"], "search {:?}", needle);
        }
    }

    #[tokio::test]
    async fn test_filters_combine() {
        let service = seeded_service();
        service
            .create(draft("Typed Hooks", "Web Development", &["React", "Hooks"]))
            .await
            .unwrap();

        let page = service
            .list(&ListParams {
                category: Some("Web Development".to_string()),
                tag: Some("Hooks".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].title, "Typed Hooks");

        let page = service
            .list(&ListParams {
                category: Some("Web Development".to_string()),
                search: Some("modern".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ids(&page.items), vec!["2"]);
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = seeded_service();
        let before: HashSet<String> = service
            .list(&ListParams::default())
            .await
            .unwrap()
            .items
            .into_iter()
            .map(|p| p.id)
            .collect();

        let submitted = draft("Shaders for Fun", "Graphics", &["WebGL", "WebGL"]);
        let created = service.create(submitted.clone()).await.unwrap();
        assert!(!before.contains(&created.id));

        let fetched = service.get_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, submitted.title);
        assert_eq!(fetched.excerpt, submitted.excerpt);
        assert_eq!(fetched.content, submitted.content);
        assert_eq!(fetched.category, submitted.category);
        assert_eq!(fetched.tags, submitted.tags);
        assert_eq!(Some(fetched.image), submitted.image);
        assert_eq!(Some(fetched.read_time), submitted.read_time);

        let padded = PostDraft {
            image: Some(" /images/a.jpg ".to_string()),
            read_time: Some("3 min read ".to_string()),
            ..draft("Padded", "Graphics", &[])
        };
        let created = service.create(padded).await.unwrap();
        let fetched = service.get_by_id(&created.id).await.unwrap();
        assert_eq!(fetched.image, " /images/a.jpg ");
        assert_eq!(fetched.read_time, "3 min read ");
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let service = seeded_service();
        let created = service
            .create(PostDraft {
                title: "Bare".to_string(),
                image: Some("https://placehold.co/100".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.image, service.defaults().default_image);
        assert_eq!(created.read_time, service.defaults().default_read_time);
        assert!(created.tags.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let service = seeded_service();
        let err = service.get_by_id("nonexistent").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { ref id, .. } if id == "nonexistent"));

        // no prefix matching
        assert!(service.get_by_id("").await.is_err());
    }

    #[tokio::test]
    async fn test_categories_and_tags_are_stable() {
        let service = seeded_service();

        let categories = service.list_categories().await.unwrap();
        assert_eq!(categories, service.list_categories().await.unwrap());
        assert_eq!(categories, vec!["AI & Machine Learning", "Web Development"]);

        service
            .create(draft("More React", "Web Development", &["React", "Testing"]))
            .await
            .unwrap();

        let tags = service.list_tags().await.unwrap();
        assert_eq!(tags, service.list_tags().await.unwrap());
        assert_eq!(tags, vec!["AI", "Deep Learning", "React", "Testing", "TypeScript"]);
        assert_eq!(service.list_categories().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_related_posts() {
        let service = seeded_service();
        assert!(service.related("1", None).await.unwrap().is_empty());

        let older = service.create(draft("Transformers", "AI", &["AI"])).await.unwrap();
        let newer = service
            .create(draft("Lip Reading Datasets", "AI", &["Deep Learning", "Data"]))
            .await
            .unwrap();
        service.create(draft("CSS Grid", "Web", &["CSS"])).await.unwrap();

        let related = service.related("1", None).await.unwrap();
        assert_eq!(ids(&related), vec![newer.id.as_str(), older.id.as_str()]);

        let related = service.related("1", Some(1)).await.unwrap();
        assert_eq!(ids(&related), vec![newer.id.as_str()]);

        assert!(matches!(
            service.related("missing", None).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_append_rejects_duplicate_id() {
        let defaults = ContentDefaults::default();
        let store = InMemoryPostStore::seeded(&defaults);
        let duplicate = Post::with_id("1", draft("Copy", "X", &[]), &defaults, Utc::now());

        let err = store.append(duplicate).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_append_keeps_timestamps_increasing() {
        let defaults = ContentDefaults::default();
        let store = InMemoryPostStore::seeded(&defaults);
        let stale = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let post = Post::with_id("old", draft("Old", "X", &[]), &defaults, stale);

        let stored = store.append(post).await.unwrap();
        let newest_seed = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert!(stored.created_at > newest_seed);
    }

    #[tokio::test]
    async fn test_with_posts_drops_duplicates() {
        let defaults = ContentDefaults::default();
        let now = Utc::now();
        let store = InMemoryPostStore::with_posts(vec![
            Post::with_id("1", draft("A", "X", &[]), &defaults, now),
            Post::with_id("1", draft("B", "X", &[]), &defaults, now),
        ]);

        let all = store.all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "A");
    }

    #[tokio::test]
    async fn test_with_posts_keeps_timestamps_increasing() {
        let defaults = ContentDefaults::default();
        let newer = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let older = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let store = InMemoryPostStore::with_posts(vec![
            Post::with_id("a", draft("A", "X", &[]), &defaults, newer),
            Post::with_id("b", draft("B", "X", &[]), &defaults, older),
            Post::with_id("c", draft("C", "X", &[]), &defaults, newer),
        ]);

        let all = store.all().await.unwrap();
        assert_eq!(all[0].created_at, newer);
        for pair in all.windows(2) {
            assert!(pair[0].created_at < pair[1].created_at);
        }

        let service = ContentQueryService::new(Arc::new(store), defaults);
        let page = service.list(&ListParams::default()).await.unwrap();
        assert_eq!(ids(&page.items), vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_concurrent_creates() {
        let service = seeded_service();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .create(draft(&format!("Concurrent {}", i), "Load", &[]))
                        .await
                })
            })
            .collect();

        let mut created = HashSet::new();
        for handle in handles {
            let post = handle.await.unwrap().unwrap();
            assert!(uuid::Uuid::parse_str(&post.id).is_ok());
            created.insert(post.id);
        }

        assert_eq!(created.len(), 20);
        assert_eq!(service.count().await.unwrap(), 22);
    }
}
