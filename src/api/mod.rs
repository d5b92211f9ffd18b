// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::HeaderName,
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{require_auth, AUTH_TOKEN_HEADER},
    models::{
        Category, CategorySummary, ChangePasswordRequest, CreateCategoryRequest,
        CreateEventRequest, EventView, LoginRequest, MessageResponse, RegisterRequest,
        TokenResponse, UpdateCategoryRequest, UpdateEventRequest, UserProfile,
    },
    state::AppState,
};

pub mod auth;
pub mod categories;
pub mod events;
pub mod health;

/// Plain-text banner served at `/`.
pub const BANNER: &str = "Event Planning API is running";

const REQUEST_ID_HEADER: &str = "x-request-id";

async fn banner() -> &'static str {
    BANNER
}

pub fn router(state: AppState) -> Router {
    // Everything here sits behind the token guard
    let protected = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/password", put(auth::change_password))
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/api/events/category/{category_id}",
            get(events::list_events_by_category),
        )
        .route(
            "/api/events/{id}",
            put(events::update_event).delete(events::delete_event),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let public = Router::new()
        .route("/", get(banner))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(public)
        .merge(protected)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

/// Registers the `x-auth-token` header scheme referenced by protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(AUTH_TOKEN_HEADER))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::me,
        auth::change_password,
        categories::create_category,
        categories::list_categories,
        categories::update_category,
        categories::delete_category,
        events::create_event,
        events::list_events,
        events::list_events_by_category,
        events::update_event,
        events::delete_event,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            TokenResponse,
            ChangePasswordRequest,
            UserProfile,
            MessageResponse,
            Category,
            CategorySummary,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            EventView,
            CreateEventRequest,
            UpdateEventRequest,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration, login and profile"),
        (name = "Categories", description = "User-owned event categories"),
        (name = "Events", description = "Dated events within categories"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
