use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::User;

pub type UserId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicateEmail,
    NotFound(UserId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateEmail => write!(f, "Duplicate email"),
            StoreError::NotFound(id) => write!(f, "User {} not found", id),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Default)]
struct Inner {
    users: HashMap<UserId, User>,
    /// email -> id, always updated together with `users`
    emails: HashMap<String, UserId>,
    next_id: UserId,
}

/// In-memory user collection guarded by a single `RwLock`.
///
/// Reads (`get`, `len`) share the lock; `insert` and `delete` hold the write
/// lock for the whole check-then-mutate sequence, so the unique-email check
/// and the insertion are atomic. Ids start at 1 and are never reused, even
/// after a delete.
pub struct UserStore {
    inner: RwLock<Inner>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                ..Inner::default()
            }),
        }
    }

    // No mutation leaves the maps half-updated, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `user` under a fresh id. Fails with `DuplicateEmail` (exact,
    /// case-sensitive match) without touching the store.
    pub fn insert(&self, user: User) -> Result<UserId, StoreError> {
        let mut inner = self.write();

        if inner.emails.contains_key(&user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let id = inner.next_id;
        inner.next_id += 1;
        inner.emails.insert(user.email.clone(), id);
        inner.users.insert(id, user);

        Ok(id)
    }

    pub fn get(&self, id: UserId) -> Result<User, StoreError> {
        self.read()
            .users
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    pub fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut inner = self.write();

        let user = inner.users.remove(&id).ok_or(StoreError::NotFound(id))?;
        inner.emails.remove(&user.email);

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
