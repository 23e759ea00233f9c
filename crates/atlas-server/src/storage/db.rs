//! SQLite database layer (embedded, no external dependencies)

use crate::error::StorageError;
use anyhow::{Context, Result};
use atlas_types::{
    LikeResult, NewResolution, Objectives, Resolution, ResolutionSummary, WishEntry,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // created_at keeps milliseconds so listing order survives bursts of submissions
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS resolutions (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                character_id INTEGER NOT NULL,
                objectives TEXT NOT NULL,
                atlas_wish TEXT NOT NULL DEFAULT '',
                likes INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_resolutions_created_at
            ON resolutions (created_at)
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&*self.pool).await?;
        Ok(())
    }

    pub async fn insert_resolution(&self, new: &NewResolution) -> Result<Resolution, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();

        // fetch_all drives the statement to completion so the write commits
        // before the connection goes back to the pool
        let mut rows: Vec<ResolutionRow> = sqlx::query_as(
            r#"
            INSERT INTO resolutions (id, name, character_id, objectives, atlas_wish)
            VALUES (?1, ?2, ?3, ?4, COALESCE(?5, ''))
            RETURNING id, name, character_id, objectives, atlas_wish, likes, created_at
            "#,
        )
        .bind(&id)
        .bind(&new.name)
        .bind(new.character)
        .bind(serde_json::to_string(&new.objectives)?)
        .bind(&new.atlas_wish)
        .fetch_all(&*self.pool)
        .await?;

        rows.pop()
            .ok_or(StorageError::Database(sqlx::Error::RowNotFound))?
            .try_into()
    }

    pub async fn list_resolutions(&self) -> Result<Vec<ResolutionSummary>, StorageError> {
        let rows: Vec<SummaryRow> = sqlx::query_as(
            r#"
            SELECT id, name, character_id, created_at
            FROM resolutions
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Every resolution with a non-empty wish, in insertion order
    pub async fn list_wishes(&self) -> Result<Vec<WishEntry>, StorageError> {
        let rows: Vec<WishRow> = sqlx::query_as(
            r#"
            SELECT id, atlas_wish, name, likes
            FROM resolutions
            WHERE atlas_wish <> ''
            ORDER BY rowid
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Add one like in a single statement; SQLite serializes concurrent writers.
    pub async fn increment_likes(&self, id: &str) -> Result<LikeResult, StorageError> {
        let mut rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            UPDATE resolutions SET likes = likes + 1
            WHERE id = ?1
            RETURNING id, likes
            "#,
        )
        .bind(id)
        .fetch_all(&*self.pool)
        .await?;

        rows.pop()
            .map(|(id, likes)| LikeResult { id, likes })
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct ResolutionRow {
    id: String,
    name: String,
    character_id: i64,
    objectives: String,
    atlas_wish: String,
    likes: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<ResolutionRow> for Resolution {
    type Error = StorageError;

    fn try_from(r: ResolutionRow) -> Result<Self, Self::Error> {
        let objectives: Objectives = serde_json::from_str(&r.objectives)?;

        Ok(Resolution {
            id: r.id,
            name: r.name,
            character: r.character_id,
            objectives,
            atlas_wish: r.atlas_wish,
            likes: r.likes,
            created_at: r.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: String,
    name: String,
    character_id: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<SummaryRow> for ResolutionSummary {
    fn from(r: SummaryRow) -> Self {
        ResolutionSummary {
            id: r.id,
            name: r.name,
            character: r.character_id,
            created_at: r.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct WishRow {
    id: String,
    atlas_wish: String,
    name: String,
    likes: i64,
}

impl From<WishRow> for WishEntry {
    fn from(r: WishRow) -> Self {
        WishEntry {
            id: r.id,
            atlas_wish: r.atlas_wish,
            name: r.name,
            likes: r.likes,
        }
    }
}
