//! Schema setup for the users/notes/labels tables
//!
//! Tables are created at process start if absent; there is no versioned
//! migration mechanism. Cascades are declared in the schema (`ON DELETE
//! CASCADE`) rather than handled by application code, so deleting a user
//! removes its notes and labels in the same statement.

use sqlx::SqlitePool;

/// Run all schema setup statements
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema setup...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS labels (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Schema setup complete");
    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_notes_user ON notes(user_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_labels_user ON labels(user_id)")
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_pool_with_options;

    #[tokio::test]
    async fn schema_setup_is_idempotent() {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");
    }

    #[tokio::test]
    async fn username_unique_index_rejects_duplicates() {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool creation failed");
        run(&pool).await.expect("schema setup failed");

        sqlx::query("INSERT INTO users (username, email, password) VALUES ('a', 'a@x.com', 'p')")
            .execute(&pool)
            .await
            .expect("first insert failed");

        let err = sqlx::query(
            "INSERT INTO users (username, email, password) VALUES ('a', 'other@x.com', 'p')",
        )
        .execute(&pool)
        .await
        .unwrap_err();

        let db_err = err.as_database_error().expect("expected database error");
        assert!(db_err.is_unique_violation());
    }
}
