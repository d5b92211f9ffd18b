// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Path constants and utilities for the record store layout.

use std::path::{Path, PathBuf};

/// Default base directory for persistent storage, relative to the working directory.
pub const DATA_ROOT: &str = "./data";

/// Storage path utilities for the record store.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self::new(DATA_ROOT)
    }
}

impl StoragePaths {
    /// Create a new StoragePaths with a custom root (useful for testing).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory for all records.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // ========== User Paths ==========

    /// Directory containing all users.
    pub fn users_dir(&self) -> PathBuf {
        self.root.join("users")
    }

    /// Path to a specific user file.
    pub fn user(&self, user_id: &str) -> PathBuf {
        self.users_dir().join(format!("{user_id}.json"))
    }

    // ========== Category Paths ==========

    /// Directory containing all categories.
    pub fn categories_dir(&self) -> PathBuf {
        self.root.join("categories")
    }

    /// Path to a specific category file.
    pub fn category(&self, category_id: &str) -> PathBuf {
        self.categories_dir().join(format!("{category_id}.json"))
    }

    // ========== Event Paths ==========

    /// Directory containing all events.
    pub fn events_dir(&self) -> PathBuf {
        self.root.join("events")
    }

    /// Path to a specific event file.
    pub fn event(&self, event_id: &str) -> PathBuf {
        self.events_dir().join(format!("{event_id}.json"))
    }
}

/// Check that an identifier is safe to use as a file stem.
///
/// Record ids are UUIDs; anything that could escape the record directory
/// (separators, dots, empty strings) is rejected so lookups of foreign input
/// resolve to "not found" instead of touching arbitrary paths.
pub fn is_valid_record_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
