//! Registration and login endpoints.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::handlers::AppState;
use crate::models::UserSummary;
use crate::services::UserService;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    let service = UserService::new(state.pool.clone(), state.jwt.clone());

    let user = service
        .register(&body.username, &body.email, &body.name, &body.password)
        .await?;
    let token = state.jwt.issue(&user)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: UserSummary::from(&user),
    }))
}

pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let service = UserService::new(state.pool.clone(), state.jwt.clone());

    match service.login(&body.username, &body.password).await? {
        Some((user, token)) => Ok(HttpResponse::Ok().json(AuthResponse {
            token,
            user: UserSummary::from(&user),
        })),
        None => Err(AppError::Unauthenticated),
    }
}
