//! In-memory [`UserStore`] used by handler tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::users::repo::{StoreError, UserStore};
use crate::users::repo_types::{CreateUserParams, UpdateUserParams, User};

#[derive(Default)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
    failing: bool,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, User>,
}

impl MemoryUserStore {
    /// A store whose every call fails like a dropped connection.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn get(&self, id: i32) -> Option<User> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        self.check()?;
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn create_user(&self, params: CreateUserParams) -> Result<User, StoreError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let user = User {
            id: inner.next_id,
            name: params.name,
            email: params.email,
            password: params.password,
        };
        inner.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, params: UpdateUserParams) -> Result<User, StoreError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        let row = inner
            .rows
            .get_mut(&params.id)
            .ok_or(StoreError::NotFound(params.id))?;
        row.name = params.name;
        row.email = params.email;
        row.password = params.password;
        Ok(row.clone())
    }

    async fn delete_user(&self, id: i32) -> Result<(), StoreError> {
        self.check()?;
        self.inner
            .lock()
            .unwrap()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
