// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Registration, login and the caller's own profile.
//!
//! Password hashing is CPU-bound, so credential work runs on the blocking
//! pool rather than on the async workers.

use axum::{extract::State, Json};

use crate::{
    auth::Auth,
    error::{ApiError, ApiJson},
    models::{
        ChangePasswordRequest, LoginRequest, MessageResponse, RegisterRequest, TokenResponse,
        UserProfile,
    },
    services::{CredentialStore, NewUser},
    state::AppState,
};

fn issue_token(state: &AppState, user_id: &str) -> Result<TokenResponse, ApiError> {
    let token = state.tokens.issue(user_id).map_err(ApiError::internal)?;
    Ok(TokenResponse { token })
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Account created", body = TokenResponse),
        (status = 400, description = "User already exists or invalid input")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let worker = state.clone();
    let profile = tokio::task::spawn_blocking(move || {
        CredentialStore::new(worker.storage()).register(NewUser {
            username: request.username,
            email: request.email,
            password: request.password,
        })
    })
    .await??;

    Ok(Json(issue_token(&state, &profile.id)?))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Logged in", body = TokenResponse),
        (status = 400, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let worker = state.clone();
    let profile = tokio::task::spawn_blocking(move || {
        CredentialStore::new(worker.storage()).verify(&request.email, &request.password)
    })
    .await??;

    tracing::debug!(user_id = %profile.id, "User logged in");
    Ok(Json(issue_token(&state, &profile.id)?))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    security(("api_key" = [])),
    responses(
        (status = 200, body = UserProfile),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User not found")
    )
)]
pub async fn me(
    Auth(user): Auth,
    State(state): State<AppState>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = CredentialStore::new(state.storage()).get_by_id(&user.user_id)?;
    Ok(Json(profile))
}

#[utoipa::path(
    put,
    path = "/api/auth/password",
    request_body = ChangePasswordRequest,
    tag = "Auth",
    security(("api_key" = [])),
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, description = "Invalid credentials"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn change_password(
    Auth(user): Auth,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    tokio::task::spawn_blocking(move || {
        CredentialStore::new(state.storage()).change_password(
            &user.user_id,
            &request.current_password,
            &request.new_password,
        )
    })
    .await??;

    Ok(Json(MessageResponse::new("Password updated")))
}
