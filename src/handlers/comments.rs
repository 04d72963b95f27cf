//! Comment endpoints.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::Result;
use crate::handlers::{resolve_identity, AppState};
use crate::services::CommentService;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

pub async fn create_comment(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let identity = resolve_identity(&state, &req).await?;
    let service = CommentService::new(state.pool.clone());

    let comment = service
        .create_comment(identity.as_ref(), path.into_inner(), &body.content)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = CommentService::new(state.pool.clone());
    let comments = service.list_comments(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(comments))
}

pub async fn delete_comment(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let identity = resolve_identity(&state, &req).await?;
    let service = CommentService::new(state.pool.clone());

    let deleted = service
        .delete_comment(identity.as_ref(), path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleted": deleted })))
}
