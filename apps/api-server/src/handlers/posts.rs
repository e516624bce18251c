//! Post handlers.

use actix_web::{HttpResponse, web};

use scribe_shared::dto::{CreatePostRequest, ListPostsParams, PostResponse, UpdatePostRequest};
use scribe_shared::validate;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /posts?page=&size=
pub async fn list(
    state: web::Data<AppState>,
    params: web::Query<ListPostsParams>,
) -> AppResult<HttpResponse> {
    let query = validate::page_query(&params)?;

    let page = state.posts.list(query).await?;

    Ok(HttpResponse::Ok().json(PostResponse::project_page(&page)))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let found = state.posts.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(&found)))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let new_post = validate::create_post(&body)?;

    let created = state.posts.create(new_post).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(&created)))
}

/// POST /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let edit = validate::update_post(post_id, &body)?;

    let updated = state.posts.update(post_id, edit).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(&updated)))
}
