// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Event service.
//!
//! An event may only reference a category owned by the same user. Writes take
//! a [`VerifiedCategory`], which can only be obtained by resolving a category
//! id against the caller's own categories, so the invariant holds for every
//! stored event without re-checking it at each call site.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use super::{required, ServiceError, ServiceResult};
use crate::storage::{
    CategoryRepository, EventRepository, JsonStorage, OwnershipCheck, StoredCategory, StoredEvent,
};

/// A category that exists and belongs to the user it was resolved for.
#[derive(Debug, Clone)]
pub struct VerifiedCategory(StoredCategory);

impl VerifiedCategory {
    /// Resolve `category_id` among the categories owned by `user_id`.
    ///
    /// Unknown and foreign categories both yield `NotFound`.
    pub fn resolve(
        categories: &CategoryRepository<'_>,
        category_id: &str,
        user_id: &str,
    ) -> ServiceResult<Self> {
        let category = categories.find(category_id).visible_to(user_id)?;
        Ok(Self(category))
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn into_inner(self) -> StoredCategory {
        self.0
    }
}

/// Fields for a new event. `date` is still in its wire form.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub description: Option<String>,
    pub date: String,
    pub time: String,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub category_id: Option<String>,
}

/// An event together with its category, if that category still exists.
#[derive(Debug, Clone)]
pub struct EventWithCategory {
    pub event: StoredEvent,
    pub category: Option<StoredCategory>,
}

/// Parse an event date given as `YYYY-MM-DD` (midnight UTC) or RFC 3339.
pub fn parse_event_date(raw: &str) -> ServiceResult<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ServiceError::validation(format!("invalid date: {raw}")))
}

pub struct EventService<'a> {
    events: EventRepository<'a>,
    categories: CategoryRepository<'a>,
}

impl<'a> EventService<'a> {
    pub fn new(storage: &'a JsonStorage) -> Self {
        Self {
            events: EventRepository::new(storage),
            categories: CategoryRepository::new(storage),
        }
    }

    /// Create an event in one of the user's categories.
    pub fn create(
        &self,
        user_id: &str,
        category_id: &str,
        input: NewEvent,
    ) -> ServiceResult<EventWithCategory> {
        let category = VerifiedCategory::resolve(&self.categories, category_id, user_id)?;

        let event = StoredEvent {
            id: uuid::Uuid::new_v4().to_string(),
            name: required("name", &input.name)?,
            description: input.description.filter(|d| !d.trim().is_empty()),
            date: parse_event_date(&input.date)?,
            time: required("time", &input.time)?,
            category_id: category.id().to_string(),
            owner_user_id: user_id.to_string(),
            created_at: Utc::now(),
        };
        self.events.create(&event)?;

        tracing::debug!(user_id, event_id = %event.id, category_id, "Event created");
        Ok(EventWithCategory {
            event,
            category: Some(category.into_inner()),
        })
    }

    /// All of the user's events, earliest date first.
    pub fn list(&self, user_id: &str) -> ServiceResult<Vec<EventWithCategory>> {
        let events = self.events.list_by_owner(user_id)?;
        self.with_categories(user_id, events)
    }

    /// The user's events in one of their categories, earliest date first.
    pub fn list_by_category(
        &self,
        user_id: &str,
        category_id: &str,
    ) -> ServiceResult<Vec<EventWithCategory>> {
        let category = VerifiedCategory::resolve(&self.categories, category_id, user_id)?;
        let events = self.events.list_by_category(user_id, category.id())?;
        self.with_categories(user_id, events)
    }

    /// Apply a partial update to an event owned by the user.
    pub fn update(
        &self,
        id: &str,
        user_id: &str,
        changes: EventChanges,
    ) -> ServiceResult<EventWithCategory> {
        let mut event = self.events.find(id).verify_owner(user_id)?;

        let category = match changes.category_id.as_deref() {
            Some(category_id) => {
                let category = VerifiedCategory::resolve(&self.categories, category_id, user_id)?;
                event.category_id = category.id().to_string();
                Some(category.into_inner())
            }
            None => self
                .categories
                .find(&event.category_id)?
                .filter(|c| c.owner_user_id == user_id),
        };

        if let Some(name) = changes.name {
            event.name = required("name", &name)?;
        }
        if let Some(description) = changes.description {
            // Blank clears, matching create
            event.description = Some(description).filter(|d| !d.trim().is_empty());
        }
        if let Some(date) = changes.date {
            event.date = parse_event_date(&date)?;
        }
        if let Some(time) = changes.time {
            event.time = required("time", &time)?;
        }

        self.events.update(&event)?;
        Ok(EventWithCategory { event, category })
    }

    /// Permanently delete an event owned by the user.
    pub fn delete(&self, id: &str, user_id: &str) -> ServiceResult<()> {
        self.events.find(id).verify_owner(user_id)?;
        self.events.delete(id)?;

        tracing::debug!(user_id, event_id = id, "Event deleted");
        Ok(())
    }

    fn with_categories(
        &self,
        user_id: &str,
        mut events: Vec<StoredEvent>,
    ) -> ServiceResult<Vec<EventWithCategory>> {
        // Stable: equal dates keep creation order
        events.sort_by_key(|event| event.date);

        let categories: HashMap<String, StoredCategory> = self
            .categories
            .list_by_owner(user_id)?
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();

        Ok(events
            .into_iter()
            .map(|event| {
                let category = categories.get(&event.category_id).cloned();
                EventWithCategory { event, category }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CategoryService;
    use crate::storage::StoragePaths;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, JsonStorage) {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let mut storage = JsonStorage::new(StoragePaths::new(temp.path()));
        storage.initialize().expect("Failed to initialize");
        (temp, storage)
    }

    fn new_event(name: &str, date: &str) -> NewEvent {
        NewEvent {
            name: name.to_string(),
            description: None,
            date: date.to_string(),
            time: "10:00".to_string(),
        }
    }

    fn dates(events: &[EventWithCategory]) -> Vec<String> {
        events
            .iter()
            .map(|e| e.event.date.format("%Y-%m-%d").to_string())
            .collect()
    }

    #[test]
    fn parse_event_date_accepts_both_forms() {
        let plain = parse_event_date("2024-01-05").unwrap();
        assert_eq!(plain, Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());

        let rfc = parse_event_date("2024-01-05T14:30:00+02:00").unwrap();
        assert_eq!(rfc, Utc.with_ymd_and_hms(2024, 1, 5, 12, 30, 0).unwrap());

        assert!(matches!(
            parse_event_date("05/01/2024"),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn list_is_sorted_by_date_for_any_insert_order() {
        let orders: [[&str; 3]; 3] = [
            ["2024-01-01", "2024-01-05", "2024-03-10"],
            ["2024-03-10", "2024-01-05", "2024-01-01"],
            ["2024-01-05", "2024-03-10", "2024-01-01"],
        ];

        for order in orders {
            let (_temp, storage) = test_storage();
            let category = CategoryService::new(&storage).create("user-a", "Work").unwrap();
            let service = EventService::new(&storage);

            for date in order {
                service
                    .create("user-a", &category.id, new_event("e", date))
                    .unwrap();
            }

            let listed = service.list("user-a").unwrap();
            assert_eq!(dates(&listed), vec!["2024-01-01", "2024-01-05", "2024-03-10"]);
            assert!(listed
                .iter()
                .all(|e| e.category.as_ref().map(|c| c.name.as_str()) == Some("Work")));
        }
    }

    #[test]
    fn foreign_category_is_not_found_and_nothing_is_created() {
        let (_temp, storage) = test_storage();
        let foreign = CategoryService::new(&storage).create("user-b", "Theirs").unwrap();
        let service = EventService::new(&storage);

        let result = service.create("user-a", &foreign.id, new_event("e", "2024-01-01"));
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
        assert!(service.list("user-a").unwrap().is_empty());
        assert!(service.list("user-b").unwrap().is_empty());
    }

    #[test]
    fn list_by_category_filters_and_checks_visibility() {
        let (_temp, storage) = test_storage();
        let categories = CategoryService::new(&storage);
        let work = categories.create("user-a", "Work").unwrap();
        let home = categories.create("user-a", "Home").unwrap();
        let service = EventService::new(&storage);

        service
            .create("user-a", &work.id, new_event("w2", "2024-02-01"))
            .unwrap();
        service
            .create("user-a", &home.id, new_event("h", "2024-01-15"))
            .unwrap();
        service
            .create("user-a", &work.id, new_event("w1", "2024-01-01"))
            .unwrap();

        let listed = service.list_by_category("user-a", &work.id).unwrap();
        let names: Vec<&str> = listed.iter().map(|e| e.event.name.as_str()).collect();
        assert_eq!(names, vec!["w1", "w2"]);

        let foreign = service.list_by_category("user-b", &work.id);
        assert!(matches!(foreign, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn foreign_event_update_and_delete_are_forbidden() {
        let (_temp, storage) = test_storage();
        let category = CategoryService::new(&storage).create("user-a", "Work").unwrap();
        let service = EventService::new(&storage);

        let created = service
            .create("user-a", &category.id, new_event("Mine", "2024-01-01"))
            .unwrap();
        let id = created.event.id;

        let changes = EventChanges {
            name: Some("Hijacked".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update(&id, "user-b", changes),
            Err(ServiceError::Forbidden)
        ));
        assert!(matches!(
            service.delete(&id, "user-b"),
            Err(ServiceError::Forbidden)
        ));

        let listed = service.list("user-a").unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].event.name, "Mine");
    }

    #[test]
    fn update_applies_only_given_fields() {
        let (_temp, storage) = test_storage();
        let categories = CategoryService::new(&storage);
        let work = categories.create("user-a", "Work").unwrap();
        let home = categories.create("user-a", "Home").unwrap();
        let service = EventService::new(&storage);

        let mut input = new_event("Standup", "2024-01-01");
        input.description = Some("daily".to_string());
        let created = service.create("user-a", &work.id, input).unwrap();

        let updated = service
            .update(
                &created.event.id,
                "user-a",
                EventChanges {
                    date: Some("2024-02-02".to_string()),
                    category_id: Some(home.id.clone()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.event.name, "Standup");
        assert_eq!(updated.event.description.as_deref(), Some("daily"));
        assert_eq!(updated.event.time, "10:00");
        assert_eq!(updated.event.category_id, home.id);
        assert_eq!(updated.category.map(|c| c.name), Some("Home".to_string()));
        assert_eq!(
            updated.event.date,
            Utc.with_ymd_and_hms(2024, 2, 2, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn blank_description_is_dropped_on_create_and_clears_on_update() {
        let (_temp, storage) = test_storage();
        let category = CategoryService::new(&storage).create("user-a", "Work").unwrap();
        let service = EventService::new(&storage);

        let mut input = new_event("Standup", "2024-01-01");
        input.description = Some("   ".to_string());
        let created = service.create("user-a", &category.id, input).unwrap();
        assert!(created.event.description.is_none());

        let mut input = new_event("Review", "2024-01-02");
        input.description = Some("weekly".to_string());
        let described = service.create("user-a", &category.id, input).unwrap();

        let updated = service
            .update(
                &described.event.id,
                "user-a",
                EventChanges {
                    description: Some("   ".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(updated.event.description.is_none());

        let listed = service.list("user-a").unwrap();
        assert!(listed.iter().all(|e| e.event.description.is_none()));
    }

    #[test]
    fn update_to_foreign_category_is_not_found() {
        let (_temp, storage) = test_storage();
        let categories = CategoryService::new(&storage);
        let mine = categories.create("user-a", "Work").unwrap();
        let theirs = categories.create("user-b", "Work").unwrap();
        let service = EventService::new(&storage);

        let created = service
            .create("user-a", &mine.id, new_event("e", "2024-01-01"))
            .unwrap();

        let result = service.update(
            &created.event.id,
            "user-a",
            EventChanges {
                category_id: Some(theirs.id),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
        assert_eq!(service.list("user-a").unwrap()[0].event.category_id, mine.id);
    }

    #[test]
    fn deleted_category_leaves_event_without_category() {
        let (_temp, storage) = test_storage();
        let categories = CategoryService::new(&storage);
        let work = categories.create("user-a", "Work").unwrap();
        let service = EventService::new(&storage);

        service
            .create("user-a", &work.id, new_event("e", "2024-01-01"))
            .unwrap();
        categories.delete(&work.id, "user-a").unwrap();

        let listed = service.list("user-a").unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].category.is_none());
    }

    #[test]
    fn missing_event_is_not_found() {
        let (_temp, storage) = test_storage();
        let service = EventService::new(&storage);

        let result = service.delete("00000000-0000-0000-0000-000000000000", "user-a");
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
