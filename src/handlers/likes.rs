//! Like endpoints.

use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::error::Result;
use crate::handlers::{resolve_identity, AppState};
use crate::services::LikeService;

pub async fn like_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let identity = resolve_identity(&state, &req).await?;
    let service = LikeService::new(state.pool.clone());

    let like = service.like(identity.as_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(like))
}

pub async fn unlike_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let identity = resolve_identity(&state, &req).await?;
    let service = LikeService::new(state.pool.clone());

    let unliked = service.unlike(identity.as_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "unliked": unliked })))
}

pub async fn like_count(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let service = LikeService::new(state.pool.clone());
    let count = service.like_count(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "count": count })))
}
