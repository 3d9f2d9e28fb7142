//! Note repository

use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Note record from database
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

/// Partial update for a note. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Note repository
pub struct NoteRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> NoteRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a note and return the stored record with its generated id.
    ///
    /// A dangling user_id trips the foreign key and propagates as
    /// `DbError::Sqlx`.
    pub async fn create(
        &self,
        title: &str,
        content: &str,
        user_id: i64,
    ) -> Result<Note, DbError> {
        let note: Note = sqlx::query_as(
            r#"
            INSERT INTO notes (title, content, user_id)
            VALUES (?, ?, ?)
            RETURNING id, title, content, user_id
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(note)
    }

    /// List all notes in default scan order.
    pub async fn list(&self) -> Result<Vec<Note>, DbError> {
        let notes: Vec<Note> =
            sqlx::query_as("SELECT id, title, content, user_id FROM notes")
                .fetch_all(self.pool)
                .await?;

        Ok(notes)
    }

    /// Get a single note by id.
    pub async fn get(&self, id: i64) -> Result<Note, DbError> {
        let note: Note = sqlx::query_as(
            "SELECT id, title, content, user_id FROM notes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "note",
            id,
        })?;

        Ok(note)
    }

    /// Apply a partial update, returning the updated record.
    pub async fn update(&self, id: i64, patch: NotePatch) -> Result<Note, DbError> {
        let mut note = self.get(id).await?;

        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }

        sqlx::query("UPDATE notes SET title = ?, content = ? WHERE id = ?")
            .bind(&note.title)
            .bind(&note.content)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(note)
    }

    /// Delete a note by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "note",
                id,
            });
        }

        Ok(())
    }
}
