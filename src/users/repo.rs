use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::users::repo_types::{CreateUserParams, UpdateUserParams, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user {0} not found")]
    NotFound(i32),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence for the `users` table.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_users(&self) -> Result<Vec<User>, StoreError>;
    async fn create_user(&self, params: CreateUserParams) -> Result<User, StoreError>;
    /// Overwrites every column of the row; `NotFound` if the id does not exist.
    async fn update_user(&self, params: UpdateUserParams) -> Result<User, StoreError>;
    async fn delete_user(&self, id: i32) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(users)
    }

    async fn create_user(&self, params: CreateUserParams) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&params.name)
        .bind(&params.email)
        .bind(&params.password)
        .fetch_one(&self.db)
        .await?;
        Ok(user)
    }

    async fn update_user(&self, params: UpdateUserParams) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
               SET name = $2, email = $3, password = $4
             WHERE id = $1
            RETURNING id, name, email, password
            "#,
        )
        .bind(params.id)
        .bind(&params.name)
        .bind(&params.email)
        .bind(&params.password)
        .fetch_optional(&self.db)
        .await?;
        user.ok_or(StoreError::NotFound(params.id))
    }

    async fn delete_user(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.db)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
