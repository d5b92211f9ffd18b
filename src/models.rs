// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies of the REST API. All types derive `Serialize`,
//! `Deserialize` and `ToSchema` for JSON handling and OpenAPI documentation.
//! Field names are camelCase on the wire.
//!
//! Stored records (`storage::repository`) never leave the server directly;
//! they are converted into the views below, which drop internal fields such
//! as the password hash.
//!
//! ## Model Categories
//!
//! - **Auth**: Registration, login, tokens and the user profile
//! - **Categories**: User-owned event categories
//! - **Events**: Dated events, each in one category

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::EventWithCategory;
use crate::storage::{StoredCategory, StoredUser};

// =============================================================================
// Auth Models
// =============================================================================

/// Request to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Unique display name.
    pub username: String,
    /// Unique login email.
    pub email: String,
    /// Raw password; only its hash is stored.
    pub password: String,
}

/// Request to log in.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session token returned by register and login.
///
/// Send it back in the `x-auth-token` header.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}

/// Request to change the caller's password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Public profile of a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<StoredUser> for UserProfile {
    fn from(user: StoredUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

// =============================================================================
// Category Models
// =============================================================================

/// A category owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Owner user ID.
    pub user: String,
    pub created_at: DateTime<Utc>,
}

impl From<StoredCategory> for Category {
    fn from(category: StoredCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            user: category.owner_user_id,
            created_at: category.created_at,
        }
    }
}

/// Category reference embedded in event views.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
}

impl From<StoredCategory> for CategorySummary {
    fn from(category: StoredCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

/// Request to create a category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Request to rename a category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: String,
}

// =============================================================================
// Event Models
// =============================================================================

/// An event with its category resolved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    /// Time of day as entered (e.g. "14:30").
    pub time: String,
    /// `null` once the category has been deleted.
    pub category: Option<CategorySummary>,
    /// Owner user ID.
    pub user: String,
    pub created_at: DateTime<Utc>,
}

impl From<EventWithCategory> for EventView {
    fn from(value: EventWithCategory) -> Self {
        let EventWithCategory { event, category } = value;
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            date: event.date,
            time: event.time,
            category: category.map(CategorySummary::from),
            user: event.owner_user_id,
            created_at: event.created_at,
        }
    }
}

/// Request to create an event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: String,
    pub time: String,
    /// Must be one of the caller's categories.
    pub category_id: String,
}

/// Partial event update; omitted fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
}
