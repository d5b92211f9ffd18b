// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Credential store: registration, login verification and profile lookup.

use chrono::Utc;

use super::{required, ServiceError, ServiceResult};
use crate::auth::password::{hash_password, verify_password};
use crate::models::UserProfile;
use crate::storage::{JsonStorage, StoredUser, UserRepository};

/// Registration input.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn user_exists() -> ServiceError {
    ServiceError::Conflict("User already exists".to_string())
}

/// Persists users and checks their passwords.
pub struct CredentialStore<'a> {
    users: UserRepository<'a>,
}

impl<'a> CredentialStore<'a> {
    pub fn new(storage: &'a JsonStorage) -> Self {
        Self {
            users: UserRepository::new(storage),
        }
    }

    /// Register a new user and return its public profile.
    ///
    /// Email and username must both be unused. A taken email is reported
    /// before any other field is validated. The check and the insert are
    /// separate store operations, so two concurrent registrations with the
    /// same email can both succeed.
    pub fn register(&self, input: NewUser) -> ServiceResult<UserProfile> {
        let email = input.email.trim();
        if !email.is_empty() && self.users.find_by_email(email)?.is_some() {
            return Err(user_exists());
        }

        let email = required("email", email)?;
        let username = required("username", &input.username)?;
        if input.password.is_empty() {
            return Err(ServiceError::validation("password is required"));
        }

        if self.users.find_by_username(&username)?.is_some() {
            return Err(user_exists());
        }

        let user = StoredUser {
            id: uuid::Uuid::new_v4().to_string(),
            username,
            email,
            password_hash: hash_password(&input.password)?,
            created_at: Utc::now(),
        };
        self.users.create(&user)?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user.into())
    }

    /// Check an email/password pair and return the matching profile.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub fn verify(&self, email: &str, password: &str) -> ServiceResult<UserProfile> {
        let user = self
            .users
            .find_by_email(email.trim())?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(user.into())
    }

    /// Public profile of a user.
    pub fn get_by_id(&self, user_id: &str) -> ServiceResult<UserProfile> {
        self.users
            .find(user_id)?
            .map(UserProfile::from)
            .ok_or_else(|| ServiceError::not_found("User"))
    }

    /// Replace a user's password after checking the current one.
    pub fn change_password(
        &self,
        user_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> ServiceResult<()> {
        if new_password.is_empty() {
            return Err(ServiceError::validation("new password is required"));
        }

        let mut user = self
            .users
            .find(user_id)?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        if !verify_password(current_password, &user.password_hash)? {
            return Err(ServiceError::InvalidCredentials);
        }

        user.password_hash = hash_password(new_password)?;
        self.users.update(&user)?;

        tracing::info!(user_id = %user.id, "Password changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoragePaths;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, JsonStorage) {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let mut storage = JsonStorage::new(StoragePaths::new(temp.path()));
        storage.initialize().expect("Failed to initialize");
        (temp, storage)
    }

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
        }
    }

    #[test]
    fn register_then_verify() {
        let (_temp, storage) = test_storage();
        let store = CredentialStore::new(&storage);

        let profile = store.register(new_user("testuser", "test@example.com")).unwrap();
        assert_eq!(profile.username, "testuser");

        let verified = store.verify("test@example.com", "password123").unwrap();
        assert_eq!(verified.id, profile.id);
    }

    #[test]
    fn password_is_not_stored_in_clear() {
        let (_temp, storage) = test_storage();
        let store = CredentialStore::new(&storage);

        let profile = store.register(new_user("testuser", "test@example.com")).unwrap();
        let stored = UserRepository::new(&storage)
            .find(&profile.id)
            .unwrap()
            .expect("user should be stored");
        assert_ne!(stored.password_hash, "password123");
        assert!(stored.password_hash.starts_with("$argon2id$"));
    }

    #[test]
    fn duplicate_email_conflicts_regardless_of_other_fields() {
        let (_temp, storage) = test_storage();
        let store = CredentialStore::new(&storage);

        store.register(new_user("first", "dup@example.com")).unwrap();

        let mut second = new_user("second", "dup@example.com");
        second.password = "something-else".to_string();
        let result = store.register(second);
        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn taken_email_conflicts_before_field_validation() {
        let (_temp, storage) = test_storage();
        let store = CredentialStore::new(&storage);

        store.register(new_user("first", "dup@example.com")).unwrap();

        let blank_username = store.register(new_user("", " dup@example.com "));
        assert!(matches!(blank_username, Err(ServiceError::Conflict(_))));

        let mut blank_password = new_user("second", "dup@example.com");
        blank_password.password.clear();
        let result = store.register(blank_password);
        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn duplicate_username_conflicts() {
        let (_temp, storage) = test_storage();
        let store = CredentialStore::new(&storage);

        store.register(new_user("same", "a@example.com")).unwrap();
        let result = store.register(new_user("same", "b@example.com"));
        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn blank_fields_are_rejected() {
        let (_temp, storage) = test_storage();
        let store = CredentialStore::new(&storage);

        let result = store.register(new_user("  ", "a@example.com"));
        assert!(matches!(result, Err(ServiceError::Validation(_))));

        let mut no_password = new_user("user", "a@example.com");
        no_password.password.clear();
        let result = store.register(no_password);
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let (_temp, storage) = test_storage();
        let store = CredentialStore::new(&storage);

        store.register(new_user("testuser", "test@example.com")).unwrap();

        let result = store.verify("test@example.com", "wrong");
        assert!(matches!(result, Err(ServiceError::InvalidCredentials)));

        let result = store.verify("nobody@example.com", "password123");
        assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
    }

    #[test]
    fn get_by_id_returns_profile_or_not_found() {
        let (_temp, storage) = test_storage();
        let store = CredentialStore::new(&storage);

        let profile = store.register(new_user("testuser", "test@example.com")).unwrap();
        assert_eq!(store.get_by_id(&profile.id).unwrap(), profile);

        let missing = store.get_by_id("00000000-0000-0000-0000-000000000000");
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn change_password_rehashes() {
        let (_temp, storage) = test_storage();
        let store = CredentialStore::new(&storage);

        let profile = store.register(new_user("testuser", "test@example.com")).unwrap();

        let wrong = store.change_password(&profile.id, "nope", "newpass456");
        assert!(matches!(wrong, Err(ServiceError::InvalidCredentials)));

        store
            .change_password(&profile.id, "password123", "newpass456")
            .unwrap();

        assert!(matches!(
            store.verify("test@example.com", "password123"),
            Err(ServiceError::InvalidCredentials)
        ));
        assert!(store.verify("test@example.com", "newpass456").is_ok());
    }
}
