//! User repository
//!
//! Users own notes and labels; the schema's ON DELETE CASCADE removes
//! both when a user row is deleted.

use sqlx::{FromRow, SqlitePool};

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Partial update for a user. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user and return the stored record with its generated id.
    ///
    /// Unique violations on username/email propagate as `DbError::Sqlx`.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DbError> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (username, email, password)
            VALUES (?, ?, ?)
            RETURNING id, username, email, password
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// List all users in default scan order.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users: Vec<User> =
            sqlx::query_as("SELECT id, username, email, password FROM users")
                .fetch_all(self.pool)
                .await?;

        Ok(users)
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        let user: User = sqlx::query_as(
            "SELECT id, username, email, password FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "user",
            id,
        })?;

        Ok(user)
    }

    /// Apply a partial update, returning the updated record.
    ///
    /// Read-modify-write: fields absent from the patch keep their stored
    /// value. Concurrent updates are last-write-wins.
    pub async fn update(&self, id: i64, patch: UserPatch) -> Result<User, DbError> {
        let mut user = self.get(id).await?;

        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }

        sqlx::query("UPDATE users SET username = ?, email = ? WHERE id = ?")
            .bind(&user.username)
            .bind(&user.email)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(user)
    }

    /// Delete a user by id. Cascades to owned notes and labels.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "user",
                id,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::testing::memory_pool;

    #[tokio::test]
    async fn create_then_list() {
        let pool = memory_pool().await;
        let repo = UserRepo::new(&pool);

        let user = repo.create("alice", "a@x.com", "p").await.unwrap();
        assert_eq!(user.username, "alice");

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, user.id);
    }

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let pool = memory_pool().await;
        let repo = UserRepo::new(&pool);

        let user = repo.create("alice", "a@x.com", "p").await.unwrap();
        let updated = repo
            .update(
                user.id,
                UserPatch {
                    email: Some("new@x.com".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.username, "alice");
        assert_eq!(updated.email, "new@x.com");
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let pool = memory_pool().await;
        let repo = UserRepo::new(&pool);

        let err = repo.update(42, UserPatch::default()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "user", id: 42 }));
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found() {
        let pool = memory_pool().await;
        let repo = UserRepo::new(&pool);

        let err = repo.delete(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "user", id: 42 }));
    }

    #[tokio::test]
    async fn duplicate_username_is_unique_violation() {
        let pool = memory_pool().await;
        let repo = UserRepo::new(&pool);

        repo.create("alice", "a@x.com", "p").await.unwrap();
        let err = repo.create("alice", "b@x.com", "p").await.unwrap_err();

        match err {
            DbError::Sqlx(e) => {
                let db_err = e.as_database_error().expect("expected database error");
                assert!(db_err.is_unique_violation());
            }
            other => panic!("expected Sqlx error, got {other:?}"),
        }
    }
}
