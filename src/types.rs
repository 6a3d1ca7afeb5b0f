use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered feed endpoint. The pipeline only ever reads these;
/// operators create, toggle and delete them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub tag: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pending,
    Approved,
    Rejected,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Approved => "approved",
            ItemStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Feed,
    Manual,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Feed => "feed",
            SourceType::Manual => "manual",
        }
    }
}

/// A piece of ingested or manually-added content.
/// `source` is the owning Source's display name, denormalized at
/// ingestion time; `url` is the deduplication key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub source: String,
    pub tag: String,
    pub source_type: SourceType,
    pub status: ItemStatus,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub approved_by: Option<String>,
}

/// Fields for an item about to be persisted. The store assigns the id
/// and `created_at`.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub url: String,
    pub source: String,
    pub tag: String,
    pub source_type: SourceType,
    pub status: ItemStatus,
    pub published_at: DateTime<Utc>,
    pub approved_by: Option<String>,
}

impl NewItem {
    /// A manually-entered item. Manual entries bypass classification
    /// and trust entirely: always approved, stamped with whoever
    /// entered them.
    pub fn manual(
        title: String,
        url: String,
        source: String,
        tag: String,
        entered_by: Option<String>,
    ) -> Self {
        Self {
            title,
            url,
            source,
            tag,
            source_type: SourceType::Manual,
            status: ItemStatus::Approved,
            published_at: Utc::now(),
            approved_by: entered_by,
        }
    }
}

/// Outcome of an insert attempt. A duplicate url is an expected,
/// non-fatal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Duplicate,
}

/// One entry pulled out of a parsed feed document.
#[derive(Debug, Clone)]
pub struct FetchedItem {
    pub title: String,
    pub link: String,
    pub published_at: Option<DateTime<Utc>>,
    pub snippet: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    /// Most-recent items considered per source per run.
    pub max_items_per_source: usize,
    /// Sources fetched concurrently; item processing within a source
    /// stays sequential.
    pub concurrent_sources: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "AI-Curator-Bot/1.0".to_string(),
            timeout_seconds: 10,
            max_items_per_source: 15,
            concurrent_sources: 4,
        }
    }
}

/// Per-source ingestion outcome, in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceReport {
    pub source: String,
    pub added: usize,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The run-level report; serialised to JSON when the run is triggered
/// by a scheduler rather than a terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
    pub timestamp: DateTime<Utc>,
    pub duration_ms: u64,
    pub sources_processed: usize,
    pub total_added: usize,
    pub results: Vec<SourceReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReclassifyReport {
    pub sources_inspected: usize,
    pub items_changed: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum CuratorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Missing environment variable: {name}")]
    MissingEnv { name: String },

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, CuratorError>;
