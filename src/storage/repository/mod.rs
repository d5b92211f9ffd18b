// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Repository layer providing typed access to the record store.
//!
//! Each repository provides CRUD operations for a specific entity type,
//! using the JsonStorage for all file operations.

pub mod categories;
pub mod events;
pub mod users;

pub use categories::{CategoryRepository, StoredCategory};
pub use events::{EventRepository, StoredEvent};
pub use users::{StoredUser, UserRepository};
