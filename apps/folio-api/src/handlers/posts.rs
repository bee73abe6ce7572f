//! Blog post handlers.

use actix_web::{HttpResponse, web};

use folio_core::domain::{ListParams, Page, Post, PostDraft};
use folio_shared::ApiResponse;
use folio_shared::dto::{CreatePostRequest, ListPostsQuery, PageResponse, PostResponse, RelatedQuery};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

fn post_response(state: &AppState, post: Post) -> PostResponse {
    let image_url = state
        .content
        .defaults()
        .resolve_image_url(&post.image, &state.public_base_url);

    PostResponse {
        id: post.id,
        title: post.title,
        excerpt: post.excerpt,
        content: post.content,
        category: post.category,
        tags: post.tags,
        image: post.image,
        image_url,
        read_time: post.read_time,
        created_at: post.created_at.to_rfc3339(),
    }
}

fn page_response(state: &AppState, page: Page<Post>) -> PageResponse<PostResponse> {
    let page = page.map(|post| post_response(state, post));
    PageResponse {
        items: page.items,
        total_items: page.total_items,
        total_pages: page.total_pages,
        page: page.page,
        page_size: page.page_size,
    }
}

/// GET /api/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner().normalized();
    let params = ListParams {
        page: query.page,
        page_size: query.page_size,
        category: query.category,
        tag: query.tag,
        search: query.search,
    };

    let page = state.content.list(&params).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page_response(&state, page))))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Required fields are checked here, the service stores whatever it is given
    let missing = req.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(
            missing
                .into_iter()
                .map(|field| format!("{} is required", field))
                .collect(),
        ));
    }

    let draft = PostDraft {
        title: req.title,
        excerpt: req.excerpt,
        content: req.content,
        category: req.category,
        tags: req.tags,
        image: req.image,
        read_time: req.read_time,
    };

    let post = state.content.create(draft).await?;
    tracing::info!(post_id = %post.id, request_id = %request_id.as_str(), "Post created");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        post_response(&state, post),
        "Post created",
    )))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.content.get_by_id(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(&state, post))))
}

/// GET /api/posts/{id}/related
pub async fn related_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<RelatedQuery>,
) -> AppResult<HttpResponse> {
    let related = state
        .content
        .related(&path.into_inner(), query.into_inner().limit)
        .await?;

    let related: Vec<PostResponse> = related
        .into_iter()
        .map(|post| post_response(&state, post))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(related)))
}
