// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::TokenService;
use crate::storage::JsonStorage;

/// Shared application state handed to every handler.
///
/// The record store is the single source of truth; the token service holds
/// immutable key material. Nothing else is shared between requests.
#[derive(Clone)]
pub struct AppState {
    storage: Arc<JsonStorage>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(storage: JsonStorage, tokens: TokenService) -> Self {
        Self {
            storage: Arc::new(storage),
            tokens: Arc::new(tokens),
        }
    }

    /// The record store.
    pub fn storage(&self) -> &JsonStorage {
        &self.storage
    }
}

/// Build a state backed by a fresh temp directory.
#[cfg(test)]
pub(crate) fn test_state() -> (tempfile::TempDir, AppState) {
    use crate::storage::StoragePaths;

    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let mut storage = JsonStorage::new(StoragePaths::new(temp_dir.path()));
    storage.initialize().expect("Failed to initialize storage");

    let state = AppState::new(storage, TokenService::new("test-secret"));
    (temp_dir, state)
}
