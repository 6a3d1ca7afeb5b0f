use crate::types::{FetchedItem, InsertOutcome, NewItem, Result, Source};
use async_trait::async_trait;
use uuid::Uuid;

/// Read access to the source registry. The pipeline never creates or
/// deletes sources through this seam.
#[async_trait]
pub trait SourceRegistry: Send + Sync {
    /// Sources eligible for polling.
    async fn list_active(&self) -> Result<Vec<Source>>;

    /// Every registered source, active or not; reclassification needs
    /// the full set to rebuild its name→url lookup.
    async fn list_all(&self) -> Result<Vec<Source>>;
}

/// Write access to the item collection.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert one item. A uniqueness conflict on `url` resolves to
    /// `Duplicate`; any other failure is an error.
    async fn insert(&self, item: NewItem) -> Result<InsertOutcome>;

    /// Bulk-flip pending items from the named sources to approved,
    /// stamping `approved_by`. Returns the number of rows changed.
    async fn approve_pending_from(
        &self,
        source_names: &[String],
        approved_by: &str,
    ) -> Result<u64>;

    /// `(id, source name)` for every approved item.
    async fn list_approved(&self) -> Result<Vec<(Uuid, String)>>;

    /// Bulk-flip the given items back to pending, clearing
    /// `approved_by`. Returns the number of rows changed.
    async fn revert_to_pending(&self, ids: &[Uuid]) -> Result<u64>;
}

/// The feed-document retrieval capability: fetch and parse one feed,
/// yielding its entries in document order, or fail with a
/// timeout/parse error scoped to that feed.
#[async_trait]
pub trait FetchFeed: Send + Sync {
    async fn fetch(&self, feed_url: &str) -> Result<Vec<FetchedItem>>;
}
