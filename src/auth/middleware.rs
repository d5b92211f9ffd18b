// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authorization guard for Axum.
//!
//! Applied as a layer over every protected route:
//!
//! ```rust,ignore
//! let protected = Router::new()
//!     .route("/api/categories", get(list_categories))
//!     .route_layer(axum::middleware::from_fn_with_state(state.clone(), require_auth));
//! ```
//!
//! The guard runs before body extraction and before any handler code, so a
//! request without a valid token never reaches the record store.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::{AuthError, AuthenticatedUser, AUTH_TOKEN_HEADER};
use crate::state::AppState;

/// Read the raw token from the `x-auth-token` header.
pub fn token_from_headers(headers: &HeaderMap) -> Result<&str, AuthError> {
    let token = headers
        .get(AUTH_TOKEN_HEADER)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidHeader)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

/// Verify the request's token and resolve the identity it asserts.
pub fn authenticate(headers: &HeaderMap, state: &AppState) -> Result<AuthenticatedUser, AuthError> {
    let token = token_from_headers(headers)?;
    let claims = state.tokens.verify(token)?;
    Ok(AuthenticatedUser::from_claims(claims))
}

/// Authentication middleware function.
///
/// On success the [`AuthenticatedUser`] is inserted into the request
/// extensions, where the [`super::Auth`] extractor picks it up.
pub async fn require_auth(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    match authenticate(request.headers(), &state) {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}
