//! Label repository
//!
//! Labels are siblings of notes under a user - nothing ties a label to a
//! note.

use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Label record from database
#[derive(Debug, Clone, FromRow)]
pub struct Label {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
}

/// Partial update for a label. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct LabelPatch {
    pub name: Option<String>,
}

/// Label repository
pub struct LabelRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LabelRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a label and return the stored record with its generated id.
    pub async fn create(&self, name: &str, user_id: i64) -> Result<Label, DbError> {
        let label: Label = sqlx::query_as(
            r#"
            INSERT INTO labels (name, user_id)
            VALUES (?, ?)
            RETURNING id, name, user_id
            "#,
        )
        .bind(name)
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(label)
    }

    /// List all labels in default scan order.
    pub async fn list(&self) -> Result<Vec<Label>, DbError> {
        let labels: Vec<Label> = sqlx::query_as("SELECT id, name, user_id FROM labels")
            .fetch_all(self.pool)
            .await?;

        Ok(labels)
    }

    /// Get a single label by id.
    pub async fn get(&self, id: i64) -> Result<Label, DbError> {
        let label: Label = sqlx::query_as("SELECT id, name, user_id FROM labels WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "label",
                id,
            })?;

        Ok(label)
    }

    /// Apply a partial update, returning the updated record.
    pub async fn update(&self, id: i64, patch: LabelPatch) -> Result<Label, DbError> {
        let mut label = self.get(id).await?;

        if let Some(name) = patch.name {
            label.name = name;
        }

        sqlx::query("UPDATE labels SET name = ? WHERE id = ?")
            .bind(&label.name)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(label)
    }

    /// Delete a label by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM labels WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "label",
                id,
            });
        }

        Ok(())
    }
}
