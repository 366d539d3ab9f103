//! Schema definitions and migration utilities.
//!
//! The SQL lives in the workspace `migrations/` directory and is embedded
//! at compile time. Both directions are idempotent.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Creates the `note` table and its title index (001_create_note.up.sql).
pub const CREATE_NOTE_MIGRATION: &str =
    include_str!("../../../migrations/001_create_note.up.sql");

/// Drops the `note` table (001_create_note.down.sql).
pub const DROP_NOTE_MIGRATION: &str =
    include_str!("../../../migrations/001_create_note.down.sql");

/// Apply all migrations.
///
/// Safe to run repeatedly; existing objects are left untouched.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running note migration (001_create_note.up.sql)...");
    sqlx::raw_sql(CREATE_NOTE_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Note migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Revert all migrations, dropping the `note` table and its data.
pub async fn revert_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::warn!("Reverting database migrations (001_create_note.down.sql)...");

    sqlx::raw_sql(DROP_NOTE_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Note revert failed: {}", e)))?;

    tracing::info!("Migrations reverted");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `note` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'note'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_migration_embedded() {
        assert!(CREATE_NOTE_MIGRATION.contains("CREATE TABLE IF NOT EXISTS note"));
        assert!(CREATE_NOTE_MIGRATION.contains("VARCHAR(64)"));
        assert!(CREATE_NOTE_MIGRATION.contains("VARCHAR(120)"));
        assert!(CREATE_NOTE_MIGRATION.contains("VARCHAR(20)"));
        assert!(CREATE_NOTE_MIGRATION.contains("ix_note_title"));
    }

    #[test]
    fn test_title_index_is_not_unique() {
        assert!(!CREATE_NOTE_MIGRATION.contains("UNIQUE"));
    }

    #[test]
    fn test_drop_migration_embedded() {
        assert!(DROP_NOTE_MIGRATION.contains("DROP TABLE IF EXISTS note"));
    }
}
