// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Business-rule failures shared by all services.

use crate::storage::StorageError;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Why a service operation was refused.
///
/// Every variant is terminal for the request; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Duplicate email, username or per-user category name
    #[error("{0}")]
    Conflict(String),
    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Request payload failed validation
    #[error("{0}")]
    Validation(String),
    /// Referenced record is missing, or not visible to the caller
    #[error("{0} not found")]
    NotFound(String),
    /// Record exists but belongs to another user
    #[error("Not authorized")]
    Forbidden,
    /// Store or hashing failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(kind: impl Into<String>) -> Self {
        Self::NotFound(kind.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<StorageError> for ServiceError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(entity) => ServiceError::NotFound(entity),
            StorageError::PermissionDenied { .. } => ServiceError::Forbidden,
            StorageError::AlreadyExists(entity) => {
                ServiceError::Conflict(format!("{entity} already exists"))
            }
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<crate::auth::password::PasswordError> for ServiceError {
    fn from(e: crate::auth::password::PasswordError) -> Self {
        ServiceError::Internal(e.to_string())
    }
}
