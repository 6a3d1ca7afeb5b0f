use crate::classifier::is_relevant;
use crate::traits::{FetchFeed, ItemStore, SourceRegistry};
use crate::trust::TrustPolicy;
use crate::types::{
    FetchConfig, IngestReport, InsertOutcome, ItemStatus, NewItem, Result, Source, SourceReport,
    SourceType,
};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::time::Instant;
use tracing::{error, info, warn};

/// Stamped into `approved_by` when the trust policy, rather than a
/// human, approves an item.
pub const TRUST_POLICY_ACTOR: &str = "trust-policy";

/// Drives one ingestion run: every active source is fetched,
/// classified, and written, with failures isolated to the source they
/// occurred in.
pub struct Ingestor<'a> {
    fetcher: &'a dyn FetchFeed,
    store: &'a dyn ItemStore,
    policy: TrustPolicy,
    config: FetchConfig,
}

impl<'a> Ingestor<'a> {
    pub fn new(
        fetcher: &'a dyn FetchFeed,
        store: &'a dyn ItemStore,
        policy: TrustPolicy,
        config: FetchConfig,
    ) -> Self {
        Self {
            fetcher,
            store,
            policy,
            config,
        }
    }

    /// Ingest every active source. A registry read failure is fatal;
    /// everything after that is isolated per source. Re-running
    /// against unchanged feeds adds nothing, since the store's unique
    /// url constraint turns repeats into skips.
    pub async fn run(&self, registry: &dyn SourceRegistry) -> Result<IngestReport> {
        let started = Instant::now();
        let timestamp = Utc::now();

        let sources = registry.list_active().await?;
        info!("Ingesting {} active sources", sources.len());

        // Sources fetch concurrently, but `buffered` keeps the report
        // in registry order and item processing stays sequential
        // within each source.
        let results: Vec<SourceReport> = stream::iter(sources.iter())
            .map(|source| self.ingest_source(source))
            .buffered(self.config.concurrent_sources)
            .collect()
            .await;

        let total_added = results.iter().map(|r| r.added).sum();
        let report = IngestReport {
            timestamp,
            duration_ms: started.elapsed().as_millis() as u64,
            sources_processed: results.len(),
            total_added,
            results,
        };

        info!(
            "Ingestion finished: {} sources, {} added, {}ms",
            report.sources_processed, report.total_added, report.duration_ms
        );
        Ok(report)
    }

    async fn ingest_source(&self, source: &Source) -> SourceReport {
        let items = match self.fetcher.fetch(&source.url).await {
            Ok(items) => items,
            Err(e) => {
                warn!("Fetch failed for {}: {}", source.name, e);
                return SourceReport {
                    source: source.name.clone(),
                    added: 0,
                    skipped: 0,
                    error: Some(e.to_string()),
                };
            }
        };

        let mut added = 0;
        let mut skipped = 0;
        let trusted = self.policy.is_trusted(&source.url);

        for item in items.into_iter().take(self.config.max_items_per_source) {
            let title = item.title.trim();
            let link = item.link.trim();
            if title.is_empty() || link.is_empty() {
                skipped += 1;
                continue;
            }

            if !is_relevant(title, item.snippet.as_deref(), &source.url) {
                skipped += 1;
                continue;
            }

            let new_item = NewItem {
                title: title.to_string(),
                url: link.to_string(),
                source: source.name.clone(),
                tag: source.tag.clone(),
                source_type: SourceType::Feed,
                status: if trusted {
                    ItemStatus::Approved
                } else {
                    ItemStatus::Pending
                },
                published_at: item.published_at.unwrap_or_else(Utc::now),
                approved_by: trusted.then(|| TRUST_POLICY_ACTOR.to_string()),
            };

            match self.store.insert(new_item).await {
                Ok(InsertOutcome::Inserted) => added += 1,
                Ok(InsertOutcome::Duplicate) => skipped += 1,
                Err(e) => {
                    // Unexpected store failure; the rest of the source
                    // still processes.
                    error!("Failed to store item {}: {}", link, e);
                    skipped += 1;
                }
            }
        }

        info!("{}: {} added, {} skipped", source.name, added, skipped);
        SourceReport {
            source: source.name.clone(),
            added,
            skipped,
            error: None,
        }
    }
}
