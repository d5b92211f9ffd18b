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
    models::{CreateEventRequest, EventView, MessageResponse, UpdateEventRequest},
    services::{EventChanges, EventService, NewEvent},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    tag = "Events",
    security(("api_key" = [])),
    responses(
        (status = 200, body = EventView),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn create_event(
    Auth(user): Auth,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateEventRequest>,
) -> Result<Json<EventView>, ApiError> {
    let event = EventService::new(state.storage()).create(
        &user.user_id,
        &request.category_id,
        NewEvent {
            name: request.name,
            description: request.description,
            date: request.date,
            time: request.time,
        },
    )?;
    Ok(Json(event.into()))
}

#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Events",
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Events sorted by date", body = [EventView]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_events(
    Auth(user): Auth,
    State(state): State<AppState>,
) -> Result<Json<Vec<EventView>>, ApiError> {
    let events = EventService::new(state.storage()).list(&user.user_id)?;
    Ok(Json(events.into_iter().map(EventView::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/events/category/{category_id}",
    params(("category_id" = String, Path, description = "Category ID")),
    tag = "Events",
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Events sorted by date", body = [EventView]),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn list_events_by_category(
    Auth(user): Auth,
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<Vec<EventView>>, ApiError> {
    let events =
        EventService::new(state.storage()).list_by_category(&user.user_id, &category_id)?;
    Ok(Json(events.into_iter().map(EventView::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(("id" = String, Path, description = "Event ID")),
    request_body = UpdateEventRequest,
    tag = "Events",
    security(("api_key" = [])),
    responses(
        (status = 200, body = EventView),
        (status = 401, description = "Missing token or not the owner"),
        (status = 404, description = "Event or category not found")
    )
)]
pub async fn update_event(
    Auth(user): Auth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateEventRequest>,
) -> Result<Json<EventView>, ApiError> {
    let event = EventService::new(state.storage()).update(
        &id,
        &user.user_id,
        EventChanges {
            name: request.name,
            description: request.description,
            date: request.date,
            time: request.time,
            category_id: request.category_id,
        },
    )?;
    Ok(Json(event.into()))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(("id" = String, Path, description = "Event ID")),
    tag = "Events",
    security(("api_key" = [])),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, description = "Missing token or not the owner"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn delete_event(
    Auth(user): Auth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    EventService::new(state.storage()).delete(&id, &user.user_id)?;
    Ok(Json(MessageResponse::new("Event removed")))
}
