// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session token claims and authenticated user representation.

use serde::{Deserialize, Serialize};

/// Claims carried by a session token.
///
/// The payload shape is `{ "user": { "id": ... }, "iat": ..., "exp": ... }`;
/// the user id is the only application claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Identity asserted by the token
    pub user: ClaimsUser,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// The `user` object inside [`TokenClaims`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimsUser {
    pub id: String,
}

/// Authenticated user information extracted from a verified token.
///
/// This is the identity attached to every protected request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Canonical user ID
    pub user_id: String,

    /// Token expiration (Unix timestamp)
    #[serde(skip)]
    pub expires_at: i64,
}

impl AuthenticatedUser {
    /// Create from verified token claims.
    pub fn from_claims(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user.id,
            expires_at: claims.exp,
        }
    }
}
