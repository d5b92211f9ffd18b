// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Record Storage Module
//!
//! Persistent storage as one JSON file per record under the data directory
//! (`DATA_DIR`, default `./data`).
//!
//! ## Storage Layout
//!
//! ```text
//! data/
//!   users/{user_id}.json
//!   categories/{category_id}.json
//!   events/{event_id}.json
//! ```
//!
//! ## Consistency
//!
//! - Single-record writes are atomic (temp file + rename)
//! - There are no multi-record transactions
//! - Uniqueness (user email/username, category name per owner) is checked
//!   before insert and is NOT atomic with it; concurrent requests can race

pub mod json_fs;
pub mod ownership;
pub mod paths;
pub mod repository;

pub use json_fs::{JsonStorage, StorageError, StorageResult};
pub use ownership::{OwnedResource, OwnershipCheck, OwnershipEnforcer};
pub use paths::StoragePaths;
pub use repository::{
    CategoryRepository, EventRepository, StoredCategory, StoredEvent, StoredUser, UserRepository,
};
