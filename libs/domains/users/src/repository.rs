use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User, UserChanges, UserList};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; `AlreadyExists` if the email is taken
    async fn create(&self, user: NewUser) -> UserResult<User>;

    /// Overwrite name and password of an existing user, returning the stored row
    async fn update(&self, changes: UserChanges) -> UserResult<User>;

    /// Delete a user by ID; `NotFound` if nothing was deleted
    async fn delete(&self, id: i32) -> UserResult<()>;

    /// Get a user by ID; `NotFound` if absent
    async fn get_by_id(&self, id: i32) -> UserResult<User>;

    /// All users, ascending by ID
    async fn get_all_users(&self) -> UserResult<UserList>;
}

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<i32, User>,
    last_id: i32,
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        if store.users.values().any(|u| u.email == user.email) {
            return Err(UserError::AlreadyExists);
        }

        store.last_id += 1;
        let user = User {
            id: store.last_id,
            name: user.name,
            email: user.email,
            password: user.password,
        };
        store.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn update(&self, changes: UserChanges) -> UserResult<User> {
        let mut store = self.store.write().await;

        let Some(user) = store.users.get_mut(&changes.id) else {
            return Err(UserError::UnexpectedRowsAffected(0));
        };
        user.name = changes.name;
        user.password = changes.password;

        tracing::info!(user_id = changes.id, "Updated user");
        Ok(user.clone())
    }

    async fn delete(&self, id: i32) -> UserResult<()> {
        let mut store = self.store.write().await;

        match store.users.remove(&id) {
            Some(_) => {
                tracing::info!(user_id = id, "Deleted user");
                Ok(())
            }
            None => Err(UserError::NotFound),
        }
    }

    async fn get_by_id(&self, id: i32) -> UserResult<User> {
        let store = self.store.read().await;
        store.users.get(&id).cloned().ok_or(UserError::NotFound)
    }

    async fn get_all_users(&self) -> UserResult<UserList> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }
}
