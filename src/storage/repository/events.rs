// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Event repository.
//!
//! Each event is stored as a separate JSON file under `/data/events/` and
//! references its category by ID. The repository does not check that the
//! category belongs to the event's owner; writes go through the event
//! service, which only accepts a verified category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::{
    paths::is_valid_record_id, JsonStorage, OwnedResource, StorageError, StorageResult,
};

/// Event record as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredEvent {
    /// Unique event identifier (UUID)
    pub id: String,
    /// Event name
    pub name: String,
    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Event date (UTC)
    pub date: DateTime<Utc>,
    /// Time of day as entered by the user (e.g. "14:30")
    pub time: String,
    /// Category this event belongs to
    pub category_id: String,
    /// Owner user ID
    pub owner_user_id: String,
    /// When the event was created
    pub created_at: DateTime<Utc>,
}

impl OwnedResource for StoredEvent {
    const KIND: &'static str = "Event";

    fn owner_user_id(&self) -> &str {
        &self.owner_user_id
    }

    fn resource_id(&self) -> &str {
        &self.id
    }
}

/// Repository for event records.
pub struct EventRepository<'a> {
    storage: &'a JsonStorage,
}

impl<'a> EventRepository<'a> {
    /// Create a new EventRepository.
    pub fn new(storage: &'a JsonStorage) -> Self {
        Self { storage }
    }

    /// Check if an event exists.
    pub fn exists(&self, event_id: &str) -> bool {
        is_valid_record_id(event_id) && self.storage.exists(self.storage.paths().event(event_id))
    }

    /// Look up an event by ID; unknown or malformed IDs yield `None`.
    pub fn find(&self, event_id: &str) -> StorageResult<Option<StoredEvent>> {
        if !self.exists(event_id) {
            return Ok(None);
        }
        match self.storage.read_json(self.storage.paths().event(event_id)) {
            Ok(event) => Ok(Some(event)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create a new event.
    pub fn create(&self, event: &StoredEvent) -> StorageResult<()> {
        let event_id = &event.id;

        if self.exists(event_id) {
            return Err(StorageError::AlreadyExists(format!("Event {event_id}")));
        }

        self.storage
            .write_json(self.storage.paths().event(event_id), event)
    }

    /// Update an existing event.
    pub fn update(&self, event: &StoredEvent) -> StorageResult<()> {
        let event_id = &event.id;

        if !self.exists(event_id) {
            return Err(StorageError::NotFound(format!("Event {event_id}")));
        }

        self.storage
            .write_json(self.storage.paths().event(event_id), event)
    }

    /// Delete an event.
    pub fn delete(&self, event_id: &str) -> StorageResult<()> {
        if !self.exists(event_id) {
            return Err(StorageError::NotFound(format!("Event {event_id}")));
        }

        self.storage.delete(self.storage.paths().event(event_id))
    }

    /// List all events owned by a user, in creation order.
    pub fn list_by_owner(&self, owner_user_id: &str) -> StorageResult<Vec<StoredEvent>> {
        let mut events: Vec<StoredEvent> = self
            .storage
            .read_all::<StoredEvent>(self.storage.paths().events_dir())?
            .into_iter()
            .filter(|event| event.owner_user_id == owner_user_id)
            .collect();

        events.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(events)
    }

    /// List a user's events in one category, in creation order.
    pub fn list_by_category(
        &self,
        owner_user_id: &str,
        category_id: &str,
    ) -> StorageResult<Vec<StoredEvent>> {
        Ok(self
            .list_by_owner(owner_user_id)?
            .into_iter()
            .filter(|event| event.category_id == category_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoragePaths;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, JsonStorage) {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let mut storage = JsonStorage::new(StoragePaths::new(temp.path()));
        storage.initialize().expect("Failed to initialize");
        (temp, storage)
    }

    fn test_event(id: &str, owner: &str, category: &str) -> StoredEvent {
        StoredEvent {
            id: id.to_string(),
            name: format!("Event {id}"),
            description: None,
            date: Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(),
            time: "09:00".to_string(),
            category_id: category.to_string(),
            owner_user_id: owner.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn create_and_find_event() {
        let (_temp, storage) = test_storage();
        let repo = EventRepository::new(&storage);

        let mut event = test_event("e-1", "user-1", "c-1");
        event.description = Some("Quarterly planning".to_string());
        repo.create(&event).unwrap();

        assert_eq!(repo.find("e-1").unwrap(), Some(event));
    }

    #[test]
    fn list_by_category_filters_owner_and_category() {
        let (_temp, storage) = test_storage();
        let repo = EventRepository::new(&storage);

        repo.create(&test_event("e-1", "user-1", "c-1")).unwrap();
        repo.create(&test_event("e-2", "user-1", "c-2")).unwrap();
        repo.create(&test_event("e-3", "user-2", "c-1")).unwrap();

        let events = repo.list_by_category("user-1", "c-1").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "e-1");

        assert_eq!(repo.list_by_owner("user-1").unwrap().len(), 2);
    }

    #[test]
    fn delete_removes_event() {
        let (_temp, storage) = test_storage();
        let repo = EventRepository::new(&storage);

        repo.create(&test_event("e-1", "user-1", "c-1")).unwrap();
        repo.delete("e-1").unwrap();

        assert!(!repo.exists("e-1"));
        assert!(matches!(repo.update(&test_event("e-1", "user-1", "c-1")), Err(StorageError::NotFound(_))));
    }
}
