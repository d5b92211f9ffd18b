// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ownership enforcement for all storage operations.
//!
//! Every owned record implements [`OwnedResource`]. Lookups are funnelled
//! through [`OwnershipCheck`] so the "find, compare owner, then act" rule
//! lives in one place:
//!
//! - [`OwnershipCheck::verify_owner`]: missing → `NotFound`, foreign →
//!   `PermissionDenied`. Used on the record a request addresses.
//! - [`OwnershipCheck::visible_to`]: missing or foreign → `NotFound`. Used on
//!   records that are only referenced, so foreign ids are indistinguishable
//!   from unknown ones.

use super::{StorageError, StorageResult};

/// Trait for records that have an owner.
pub trait OwnedResource {
    /// Human-readable kind used in error messages ("Category", "Event").
    const KIND: &'static str;

    /// Get the owner's user ID.
    fn owner_user_id(&self) -> &str;

    /// Get the record's own ID.
    fn resource_id(&self) -> &str;
}

/// Trait for enforcing ownership on a loaded record.
pub trait OwnershipEnforcer {
    /// Verify that the user owns this resource.
    ///
    /// # Errors
    /// Returns `StorageError::PermissionDenied` if the user doesn't own the resource.
    fn verify_ownership(&self, user_id: &str) -> StorageResult<()>;
}

impl<T: OwnedResource> OwnershipEnforcer for T {
    fn verify_ownership(&self, user_id: &str) -> StorageResult<()> {
        if self.owner_user_id() == user_id {
            Ok(())
        } else {
            Err(StorageError::PermissionDenied {
                user_id: user_id.to_string(),
                resource: format!("{} {}", T::KIND, self.resource_id()),
            })
        }
    }
}

/// Ownership checks on the result of a lookup.
pub trait OwnershipCheck<T> {
    /// Return the resource if it exists and the user owns it.
    fn verify_owner(self, user_id: &str) -> StorageResult<T>;

    /// Return the resource only if the user owns it; anything else is `NotFound`.
    fn visible_to(self, user_id: &str) -> StorageResult<T>;
}

impl<T: OwnedResource> OwnershipCheck<T> for Option<T> {
    fn verify_owner(self, user_id: &str) -> StorageResult<T> {
        match self {
            Some(resource) => {
                resource.verify_ownership(user_id)?;
                Ok(resource)
            }
            None => Err(StorageError::NotFound(T::KIND.to_string())),
        }
    }

    fn visible_to(self, user_id: &str) -> StorageResult<T> {
        match self {
            Some(resource) if resource.owner_user_id() == user_id => Ok(resource),
            _ => Err(StorageError::NotFound(T::KIND.to_string())),
        }
    }
}

impl<T: OwnedResource> OwnershipCheck<T> for StorageResult<Option<T>> {
    fn verify_owner(self, user_id: &str) -> StorageResult<T> {
        self?.verify_owner(user_id)
    }

    fn visible_to(self, user_id: &str) -> StorageResult<T> {
        self?.visible_to(user_id)
    }
}
