//! HTTP handlers: the thin surface between the transport and the content
//! service. Each handler extracts the bearer token, resolves the caller's
//! identity, invokes one service operation and serializes the result.

pub mod auth;
pub mod comments;
pub mod likes;
pub mod posts;

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use sqlx::SqlitePool;

use crate::auth::jwt::Jwt;
use crate::auth::Identity;
use crate::error::Result;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt: Jwt,
}

impl AppState {
    pub fn new(pool: SqlitePool, jwt: Jwt) -> Self {
        Self { pool, jwt }
    }
}

/// Configure all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api/v1")
            .route("/auth/register", web::post().to(auth::register))
            .route("/auth/login", web::post().to(auth::login))
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts", web::post().to(posts::create_post))
            .route("/posts/mine", web::get().to(posts::my_posts))
            .route("/posts/{id}", web::get().to(posts::get_post))
            .route("/posts/{id}", web::patch().to(posts::update_post))
            .route("/posts/{id}", web::delete().to(posts::delete_post))
            .route("/posts/{id}/comments", web::get().to(comments::list_comments))
            .route("/posts/{id}/comments", web::post().to(comments::create_comment))
            .route("/comments/{id}", web::delete().to(comments::delete_comment))
            .route("/posts/{id}/like", web::post().to(likes::like_post))
            .route("/posts/{id}/like", web::delete().to(likes::unlike_post))
            .route("/posts/{id}/likes/count", web::get().to(likes::like_count)),
    );
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Extract the bearer token from the Authorization header, if any
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolve the calling identity from the request. A missing or invalid
/// token resolves to `None`; individual operations decide whether an
/// identity is required.
pub(crate) async fn resolve_identity(
    state: &AppState,
    req: &HttpRequest,
) -> Result<Option<Identity>> {
    Ok(state.jwt.resolve(&state.pool, bearer_token(req)).await?)
}
