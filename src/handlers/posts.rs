//! Post endpoints.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::handlers::{resolve_identity, AppState};
use crate::models::PostPatch;
use crate::services::PostService;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

pub async fn create_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let identity = resolve_identity(&state, &req).await?;
    let service = PostService::new(state.pool.clone());

    let post = service
        .create_post(identity.as_ref(), &body.title, &body.content)
        .await?;

    Ok(HttpResponse::Created().json(post))
}

pub async fn list_posts(state: web::Data<AppState>) -> Result<HttpResponse> {
    let service = PostService::new(state.pool.clone());
    let posts = service.list_posts().await?;

    Ok(HttpResponse::Ok().json(posts))
}

pub async fn my_posts(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let identity = resolve_identity(&state, &req).await?;
    let service = PostService::new(state.pool.clone());

    let posts = service.list_posts_by_author(identity.as_ref()).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Aggregated read: post fields, author, like count, viewer-liked flag
/// and comments in a single response.
pub async fn get_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let post_id = path.into_inner();
    let viewer = resolve_identity(&state, &req).await?;
    let service = PostService::new(state.pool.clone());

    let detail = service
        .get_post_detail(post_id, viewer.as_ref())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {post_id} not found")))?;

    Ok(HttpResponse::Ok().json(detail))
}

pub async fn update_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<PostPatch>,
) -> Result<HttpResponse> {
    let identity = resolve_identity(&state, &req).await?;
    let service = PostService::new(state.pool.clone());

    let post = service
        .update_post(identity.as_ref(), path.into_inner(), &body)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

pub async fn delete_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let identity = resolve_identity(&state, &req).await?;
    let service = PostService::new(state.pool.clone());

    let deleted = service.delete_post(identity.as_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleted": deleted })))
}
