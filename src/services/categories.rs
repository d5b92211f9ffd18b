// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Category service: ownership-scoped CRUD over categories.

use chrono::Utc;

use super::{required, ServiceError, ServiceResult};
use crate::storage::{CategoryRepository, JsonStorage, OwnershipCheck, StoredCategory};

pub struct CategoryService<'a> {
    categories: CategoryRepository<'a>,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a JsonStorage) -> Self {
        Self {
            categories: CategoryRepository::new(storage),
        }
    }

    /// Create a category; the name must be unused among the user's categories.
    pub fn create(&self, user_id: &str, name: &str) -> ServiceResult<StoredCategory> {
        let name = required("name", name)?;

        // Not atomic with the insert below
        if self.categories.find_by_name(user_id, &name)?.is_some() {
            return Err(ServiceError::Conflict("Category already exists".to_string()));
        }

        let category = StoredCategory {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            owner_user_id: user_id.to_string(),
            created_at: Utc::now(),
        };
        self.categories.create(&category)?;

        tracing::debug!(user_id, category_id = %category.id, "Category created");
        Ok(category)
    }

    /// All categories owned by the user, oldest first.
    pub fn list(&self, user_id: &str) -> ServiceResult<Vec<StoredCategory>> {
        Ok(self.categories.list_by_owner(user_id)?)
    }

    /// Rename a category owned by the user.
    pub fn update(&self, id: &str, user_id: &str, name: &str) -> ServiceResult<StoredCategory> {
        let mut category = self.categories.find(id).verify_owner(user_id)?;
        category.name = required("name", name)?;
        self.categories.update(&category)?;
        Ok(category)
    }

    /// Permanently delete a category owned by the user.
    ///
    /// Events in the category are left in place.
    pub fn delete(&self, id: &str, user_id: &str) -> ServiceResult<()> {
        self.categories.find(id).verify_owner(user_id)?;
        self.categories.delete(id)?;

        tracing::debug!(user_id, category_id = id, "Category deleted");
        Ok(())
    }
}
