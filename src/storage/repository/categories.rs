// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Category repository.
//!
//! Categories are user-defined groupings for events.
//! Each category is stored as a separate JSON file under `/data/categories/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::{
    paths::is_valid_record_id, JsonStorage, OwnedResource, StorageError, StorageResult,
};

/// Category record as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredCategory {
    /// Unique category identifier (UUID)
    pub id: String,
    /// Display name, unique per owner at creation time
    pub name: String,
    /// Owner user ID
    pub owner_user_id: String,
    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl OwnedResource for StoredCategory {
    const KIND: &'static str = "Category";

    fn owner_user_id(&self) -> &str {
        &self.owner_user_id
    }

    fn resource_id(&self) -> &str {
        &self.id
    }
}

/// Repository for category records.
pub struct CategoryRepository<'a> {
    storage: &'a JsonStorage,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new CategoryRepository.
    pub fn new(storage: &'a JsonStorage) -> Self {
        Self { storage }
    }

    /// Check if a category exists.
    pub fn exists(&self, category_id: &str) -> bool {
        is_valid_record_id(category_id)
            && self
                .storage
                .exists(self.storage.paths().category(category_id))
    }

    /// Look up a category by ID; unknown or malformed IDs yield `None`.
    pub fn find(&self, category_id: &str) -> StorageResult<Option<StoredCategory>> {
        if !self.exists(category_id) {
            return Ok(None);
        }
        match self
            .storage
            .read_json(self.storage.paths().category(category_id))
        {
            Ok(category) => Ok(Some(category)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Find a user's category by exact name.
    pub fn find_by_name(
        &self,
        owner_user_id: &str,
        name: &str,
    ) -> StorageResult<Option<StoredCategory>> {
        Ok(self
            .list_by_owner(owner_user_id)?
            .into_iter()
            .find(|category| category.name == name))
    }

    /// Create a new category.
    pub fn create(&self, category: &StoredCategory) -> StorageResult<()> {
        let category_id = &category.id;

        if self.exists(category_id) {
            return Err(StorageError::AlreadyExists(format!(
                "Category {category_id}"
            )));
        }

        self.storage
            .write_json(self.storage.paths().category(category_id), category)
    }

    /// Update an existing category.
    pub fn update(&self, category: &StoredCategory) -> StorageResult<()> {
        let category_id = &category.id;

        if !self.exists(category_id) {
            return Err(StorageError::NotFound(format!("Category {category_id}")));
        }

        self.storage
            .write_json(self.storage.paths().category(category_id), category)
    }

    /// Delete a category.
    pub fn delete(&self, category_id: &str) -> StorageResult<()> {
        if !self.exists(category_id) {
            return Err(StorageError::NotFound(format!("Category {category_id}")));
        }

        self.storage
            .delete(self.storage.paths().category(category_id))
    }

    /// List all categories owned by a user, oldest first.
    pub fn list_by_owner(&self, owner_user_id: &str) -> StorageResult<Vec<StoredCategory>> {
        let mut categories: Vec<StoredCategory> = self
            .storage
            .read_all::<StoredCategory>(self.storage.paths().categories_dir())?
            .into_iter()
            .filter(|category| category.owner_user_id == owner_user_id)
            .collect();

        categories.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoragePaths;
    use chrono::Duration;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, JsonStorage) {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let mut storage = JsonStorage::new(StoragePaths::new(temp.path()));
        storage.initialize().expect("Failed to initialize");
        (temp, storage)
    }

    fn test_category(id: &str, owner: &str, name: &str) -> StoredCategory {
        StoredCategory {
            id: id.to_string(),
            name: name.to_string(),
            owner_user_id: owner.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn create_and_find_category() {
        let (_temp, storage) = test_storage();
        let repo = CategoryRepository::new(&storage);

        let category = test_category("c-1", "user-1", "Work");
        repo.create(&category).unwrap();

        assert_eq!(repo.find("c-1").unwrap(), Some(category));
        assert_eq!(repo.find("c-2").unwrap(), None);
    }

    #[test]
    fn list_by_owner_filters_and_orders_by_creation() {
        let (_temp, storage) = test_storage();
        let repo = CategoryRepository::new(&storage);
        let base = Utc::now();

        let mut later = test_category("c-later", "user-1", "Later");
        later.created_at = base + Duration::seconds(10);
        let mut earlier = test_category("c-earlier", "user-1", "Earlier");
        earlier.created_at = base;

        repo.create(&later).unwrap();
        repo.create(&earlier).unwrap();
        repo.create(&test_category("c-other", "user-2", "Other"))
            .unwrap();

        let names: Vec<String> = repo
            .list_by_owner("user-1")
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Earlier", "Later"]);
    }

    #[test]
    fn find_by_name_is_scoped_to_owner() {
        let (_temp, storage) = test_storage();
        let repo = CategoryRepository::new(&storage);

        repo.create(&test_category("c-1", "user-1", "Work")).unwrap();

        assert!(repo.find_by_name("user-1", "Work").unwrap().is_some());
        assert!(repo.find_by_name("user-2", "Work").unwrap().is_none());
        assert!(repo.find_by_name("user-1", "work").unwrap().is_none());
    }

    #[test]
    fn update_and_delete() {
        let (_temp, storage) = test_storage();
        let repo = CategoryRepository::new(&storage);

        let mut category = test_category("c-1", "user-1", "Work");
        repo.create(&category).unwrap();

        category.name = "Office".to_string();
        repo.update(&category).unwrap();
        assert_eq!(repo.find("c-1").unwrap().unwrap().name, "Office");

        repo.delete("c-1").unwrap();
        assert!(repo.find("c-1").unwrap().is_none());
        assert!(matches!(repo.delete("c-1"), Err(StorageError::NotFound(_))));
    }
}
