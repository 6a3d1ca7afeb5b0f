use crate::config::CuratorConfig;
use crate::traits::{ItemStore, SourceRegistry};
use crate::types::{InsertOutcome, NewItem, Result, Source};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::str::FromStr;
use tracing::{debug, info};
use uuid::Uuid;

/// Postgres-backed implementation of the source registry and item
/// store. Schema lives in `migrations/`; run `sqlx migrate run` before
/// first use.
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub async fn connect(config: &CuratorConfig) -> Result<Self> {
        let options = PgConnectOptions::from_str(&config.database_url)?
            .password(&config.database_password);

        let db = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { db })
    }

    /// Register a source, skipping it when the url is already known.
    /// Returns whether a row was actually added.
    pub async fn add_source(&self, name: &str, url: &str, tag: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO sources (id, name, url, tag, is_active, created_at)
            VALUES ($1, $2, $3, $4, true, $5)
            ON CONFLICT (url) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(url)
        .bind(tag)
        .bind(Utc::now())
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn source_from_row(row: &PgRow) -> std::result::Result<Source, sqlx::Error> {
    Ok(Source {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        url: row.try_get("url")?,
        tag: row.try_get("tag")?,
        is_active: row.try_get("is_active")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl SourceRegistry for PgStore {
    async fn list_active(&self) -> Result<Vec<Source>> {
        let rows = sqlx::query(
            "SELECT * FROM sources WHERE is_active = true ORDER BY created_at",
        )
        .fetch_all(&self.db)
        .await?;

        let sources = rows
            .iter()
            .map(source_from_row)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!("Loaded {} active sources", sources.len());
        Ok(sources)
    }

    async fn list_all(&self) -> Result<Vec<Source>> {
        let rows = sqlx::query("SELECT * FROM sources ORDER BY created_at")
            .fetch_all(&self.db)
            .await?;

        Ok(rows
            .iter()
            .map(source_from_row)
            .collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

#[async_trait]
impl ItemStore for PgStore {
    async fn insert(&self, item: NewItem) -> Result<InsertOutcome> {
        let result = sqlx::query(
            r#"
            INSERT INTO items (id, title, url, source, tag, source_type, status, published_at, created_at, approved_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&item.title)
        .bind(&item.url)
        .bind(&item.source)
        .bind(&item.tag)
        .bind(item.source_type.as_str())
        .bind(item.status.as_str())
        .bind(item.published_at)
        .bind(Utc::now())
        .bind(&item.approved_by)
        .execute(&self.db)
        .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            // The unique index on items.url is the sole dedup guard;
            // losing the race to an earlier insert is expected.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                debug!("Duplicate item url: {}", item.url);
                Ok(InsertOutcome::Duplicate)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn approve_pending_from(
        &self,
        source_names: &[String],
        approved_by: &str,
    ) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE items SET status = 'approved', approved_by = $2
            WHERE status = 'pending' AND source = ANY($1)
            "#,
        )
        .bind(source_names)
        .bind(approved_by)
        .execute(&self.db)
        .await?;

        info!(
            "Approved {} pending items from {} trusted sources",
            result.rows_affected(),
            source_names.len()
        );
        Ok(result.rows_affected())
    }

    async fn list_approved(&self) -> Result<Vec<(Uuid, String)>> {
        let rows = sqlx::query("SELECT id, source FROM items WHERE status = 'approved'")
            .fetch_all(&self.db)
            .await?;

        rows.iter()
            .map(|row| -> Result<(Uuid, String)> {
                Ok((row.try_get("id")?, row.try_get("source")?))
            })
            .collect()
    }

    async fn revert_to_pending(&self, ids: &[Uuid]) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE items SET status = 'pending', approved_by = NULL
            WHERE status = 'approved' AND id = ANY($1)
            "#,
        )
        .bind(ids)
        .execute(&self.db)
        .await?;

        info!("Reverted {} items to pending", result.rows_affected());
        Ok(result.rows_affected())
    }
}
