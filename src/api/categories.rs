// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    auth::Auth,
    error::{ApiError, ApiJson},
    models::{Category, CreateCategoryRequest, MessageResponse, UpdateCategoryRequest},
    services::CategoryService,
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    tag = "Categories",
    security(("api_key" = [])),
    responses(
        (status = 200, body = Category),
        (status = 400, description = "Category already exists"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_category(
    Auth(user): Auth,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateCategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    let category = CategoryService::new(state.storage()).create(&user.user_id, &request.name)?;
    Ok(Json(category.into()))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    security(("api_key" = [])),
    responses(
        (status = 200, body = [Category]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_categories(
    Auth(user): Auth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = CategoryService::new(state.storage()).list(&user.user_id)?;
    Ok(Json(categories.into_iter().map(Category::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = String, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    tag = "Categories",
    security(("api_key" = [])),
    responses(
        (status = 200, body = Category),
        (status = 401, description = "Missing token or not the owner"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    Auth(user): Auth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateCategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    let category =
        CategoryService::new(state.storage()).update(&id, &user.user_id, &request.name)?;
    Ok(Json(category.into()))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = String, Path, description = "Category ID")),
    tag = "Categories",
    security(("api_key" = [])),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, description = "Missing token or not the owner"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    Auth(user): Auth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    CategoryService::new(state.storage()).delete(&id, &user.user_id)?;
    Ok(Json(MessageResponse::new("Category removed")))
}
