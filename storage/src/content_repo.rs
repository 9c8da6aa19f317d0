//! Content repository: persistence and rotation queries for jar items.
//!
//! Uses SqlitePoolManager and the models (ContentRecord, NewContent, ContentStats).
//! External: SQLite via sqlx; the selector drives it through [`ContentStore`].

use crate::content_store::ContentStore;
use crate::error::StorageError;
use crate::models::{ContentRecord, ContentStats, MoodCount, MoodFilter, NewContent};
use crate::sqlite_pool::SqlitePoolManager;
use async_trait::async_trait;
use tracing::{debug, info};

const COLUMNS: &str = "id, content_ref, mood, text, used";

#[derive(Clone)]
pub struct ContentRepository {
    pool_manager: SqlitePoolManager,
}

impl ContentRepository {
    /// Creates a repository without touching the database. Call [`Self::init`] to create the schema.
    pub fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::connect_lazy(database_url)?;
        Ok(Self { pool_manager })
    }

    /// Connects and creates the schema in one step.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let repo = Self::connect(database_url)?;
        repo.init().await?;
        Ok(repo)
    }

    /// Creates the `jar_items` table and mood index if missing.
    pub async fn init(&self) -> Result<(), StorageError> {
        info!("Creating jar tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS jar_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                content_ref TEXT,
                mood TEXT NOT NULL,
                text TEXT,
                used INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_jar_items_mood_used ON jar_items(mood, used)")
            .execute(pool)
            .await?;

        info!("Jar tables ready");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<ContentRecord>, StorageError> {
        let sql = format!("SELECT {} FROM jar_items WHERE id = ?", COLUMNS);
        let record = sqlx::query_as::<_, ContentRecord>(&sql)
            .bind(id)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        Ok(record)
    }
}

#[async_trait]
impl ContentStore for ContentRepository {
    async fn insert(&self, content: &NewContent) -> Result<i64, StorageError> {
        let (content_ref, text) = content.columns();

        let result = sqlx::query("INSERT INTO jar_items (content_ref, mood, text) VALUES (?, ?, ?)")
            .bind(content_ref)
            .bind(content.mood())
            .bind(text)
            .execute(self.pool_manager.pool())
            .await?;

        let id = result.last_insert_rowid();
        info!(item_id = id, mood = %content.mood(), "Saved jar item");
        Ok(id)
    }

    async fn pick_random(
        &self,
        filter: &MoodFilter,
        only_unused: bool,
    ) -> Result<Option<ContentRecord>, StorageError> {
        let mut sql = format!("SELECT {} FROM jar_items WHERE 1=1", COLUMNS);
        if only_unused {
            sql.push_str(" AND used = 0");
        }
        if filter.tag().is_some() {
            sql.push_str(" AND mood = ?");
        }
        sql.push_str(" ORDER BY RANDOM() LIMIT 1");

        let mut query = sqlx::query_as::<_, ContentRecord>(&sql);
        if let Some(tag) = filter.tag() {
            query = query.bind(tag);
        }

        let record = query.fetch_optional(self.pool_manager.pool()).await?;
        debug!(
            mood = %filter,
            only_unused = only_unused,
            item_id = ?record.as_ref().map(|r| r.id),
            "Picked random jar item"
        );
        Ok(record)
    }

    async fn reset_used(&self, filter: &MoodFilter) -> Result<u64, StorageError> {
        let result = match filter.tag() {
            Some(tag) => {
                sqlx::query("UPDATE jar_items SET used = 0 WHERE mood = ?")
                    .bind(tag)
                    .execute(self.pool_manager.pool())
                    .await?
            }
            None => {
                sqlx::query("UPDATE jar_items SET used = 0")
                    .execute(self.pool_manager.pool())
                    .await?
            }
        };

        info!(mood = %filter, rows = result.rows_affected(), "Reset used flags");
        Ok(result.rows_affected())
    }

    async fn mark_used(&self, id: i64) -> Result<(), StorageError> {
        sqlx::query("UPDATE jar_items SET used = 1 WHERE id = ?")
            .bind(id)
            .execute(self.pool_manager.pool())
            .await?;
        Ok(())
    }

    async fn stats(&self) -> Result<ContentStats, StorageError> {
        let rows: Vec<(String, i64, i64)> = sqlx::query_as(
            "SELECT mood, COUNT(*), COALESCE(SUM(used), 0) FROM jar_items GROUP BY mood ORDER BY mood",
        )
        .fetch_all(self.pool_manager.pool())
        .await?;

        Ok(ContentStats {
            moods: rows
                .into_iter()
                .map(|(mood, total, used)| MoodCount { mood, total, used })
                .collect(),
        })
    }
}
