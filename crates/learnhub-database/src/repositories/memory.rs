//! In-process user store using dashmap.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_entity::user::{CreateUser, User, UserRole};

use super::{DUPLICATE_ACCOUNT_MESSAGE, UserStore};

/// User store kept entirely in memory.
///
/// The `(email, role)` index is the uniqueness constraint: inserting goes
/// through its entry API, so the shard lock serializes racing creates.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<DashMap<Uuid, User>>,
    by_account: Arc<DashMap<(String, UserRole), Uuid>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email_and_role(
        &self,
        email: &str,
        role: UserRole,
    ) -> AppResult<Option<User>> {
        let id = match self.by_account.get(&(email.to_string(), role)) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn create(&self, data: CreateUser) -> AppResult<User> {
        match self.by_account.entry((data.email.clone(), data.role)) {
            Entry::Occupied(_) => Err(AppError::conflict(DUPLICATE_ACCOUNT_MESSAGE)),
            Entry::Vacant(slot) => {
                let user = data.into_user();
                self.users.insert(user.id, user.clone());
                slot.insert(user.id);
                debug!(user_id = %user.id, role = %user.role, "Stored user in memory");
                Ok(user)
            }
        }
    }
}
