// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Password hashing, session tokens and the authorization guard.
//!
//! ## Auth Flow
//!
//! 1. Client registers or logs in with email and password
//! 2. Server returns `{ "token": "<JWT>" }` (HS256, one hour)
//! 3. Client sends the token in the `x-auth-token` header (no bearer scheme)
//! 4. Guard verifies signature and expiry and attaches the user id
//!
//! ## Security
//!
//! - Passwords are stored as Argon2id hashes with per-record salts
//! - The signing secret comes from `JWT_SECRET`; the built-in fallback is a
//!   known weakness and is logged as such at startup
//! - There are no roles: a request may only touch records its user owns

pub mod claims;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod password;
pub mod token;

pub use claims::{AuthenticatedUser, TokenClaims};
pub use error::AuthError;
pub use extractor::Auth;
pub use middleware::require_auth;
pub use token::{TokenError, TokenService};

/// Request header carrying the session token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";
