// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Business logic between the HTTP handlers and the record store.
//!
//! Services are plain synchronous structs borrowing the store for the
//! duration of one request. Each operation validates, authorizes through the
//! ownership predicate, then persists; a failure at any step leaves the
//! store untouched.

pub mod categories;
pub mod credentials;
pub mod error;
pub mod events;

pub use categories::CategoryService;
pub use credentials::{CredentialStore, NewUser};
pub use error::{ServiceError, ServiceResult};
pub use events::{
    parse_event_date, EventChanges, EventService, EventWithCategory, NewEvent, VerifiedCategory,
};

/// Trim a required text field, rejecting empty values.
pub(crate) fn required(field: &str, value: &str) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}
