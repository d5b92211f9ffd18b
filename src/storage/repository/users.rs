// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User repository.
//!
//! Each user is stored as `/data/users/{user_id}.json`. The stored record
//! carries the Argon2 PHC hash; it is never serialized to API clients
//! (see [`crate::models::UserProfile`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::{paths::is_valid_record_id, JsonStorage, StorageError, StorageResult};

/// User record as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredUser {
    /// Unique user identifier (UUID)
    pub id: String,
    /// Unique display name
    pub username: String,
    /// Unique login email
    pub email: String,
    /// Argon2 PHC string (algorithm, parameters, salt and hash)
    pub password_hash: String,
    /// When the user registered
    pub created_at: DateTime<Utc>,
}

/// Repository for user records.
pub struct UserRepository<'a> {
    storage: &'a JsonStorage,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository.
    pub fn new(storage: &'a JsonStorage) -> Self {
        Self { storage }
    }

    /// Check if a user exists.
    pub fn exists(&self, user_id: &str) -> bool {
        is_valid_record_id(user_id) && self.storage.exists(self.storage.paths().user(user_id))
    }

    /// Look up a user by ID; unknown or malformed IDs yield `None`.
    pub fn find(&self, user_id: &str) -> StorageResult<Option<StoredUser>> {
        if !self.exists(user_id) {
            return Ok(None);
        }
        match self.storage.read_json(self.storage.paths().user(user_id)) {
            Ok(user) => Ok(Some(user)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Find the user registered with an email address (exact match).
    pub fn find_by_email(&self, email: &str) -> StorageResult<Option<StoredUser>> {
        Ok(self.list_all()?.into_iter().find(|user| user.email == email))
    }

    /// Find the user with a username (exact match).
    pub fn find_by_username(&self, username: &str) -> StorageResult<Option<StoredUser>> {
        Ok(self
            .list_all()?
            .into_iter()
            .find(|user| user.username == username))
    }

    /// Create a new user.
    pub fn create(&self, user: &StoredUser) -> StorageResult<()> {
        let user_id = &user.id;

        if self.exists(user_id) {
            return Err(StorageError::AlreadyExists(format!("User {user_id}")));
        }

        self.storage
            .write_json(self.storage.paths().user(user_id), user)
    }

    /// Update an existing user.
    pub fn update(&self, user: &StoredUser) -> StorageResult<()> {
        let user_id = &user.id;

        if !self.exists(user_id) {
            return Err(StorageError::NotFound(format!("User {user_id}")));
        }

        self.storage
            .write_json(self.storage.paths().user(user_id), user)
    }

    /// List all users.
    pub fn list_all(&self) -> StorageResult<Vec<StoredUser>> {
        self.storage.read_all(self.storage.paths().users_dir())
    }
}
