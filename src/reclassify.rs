//! Batch reclassification of stored items against the current trust
//! policy, independent of the ingestion runs that created them.
//!
//! Items carry their source's display name, not a key, so both
//! operations rebuild a name-based lookup from the live registry
//! before judging trust.

use crate::ingest::TRUST_POLICY_ACTOR;
use crate::traits::{ItemStore, SourceRegistry};
use crate::trust::TrustPolicy;
use crate::types::{ReclassifyReport, Result};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

/// Approve every pending item whose source is trusted under `policy`.
/// Items whose source name no longer exists in the registry cannot be
/// selected and are left untouched.
pub async fn promote_by_trust(
    registry: &dyn SourceRegistry,
    store: &dyn ItemStore,
    policy: &TrustPolicy,
) -> Result<ReclassifyReport> {
    let sources = registry.list_all().await?;

    let trusted_names: Vec<String> = sources
        .iter()
        .filter(|s| policy.is_trusted(&s.url))
        .map(|s| s.name.clone())
        .collect();

    info!(
        "{} of {} sources are trusted: {:?}",
        trusted_names.len(),
        sources.len(),
        trusted_names
    );

    let items_changed = if trusted_names.is_empty() {
        0
    } else {
        store
            .approve_pending_from(&trusted_names, TRUST_POLICY_ACTOR)
            .await?
    };

    Ok(ReclassifyReport {
        sources_inspected: sources.len(),
        items_changed,
    })
}

/// Revert every approved item that the current policy no longer
/// trusts. An item whose source name has no match in the registry is
/// treated as untrusted and reverted; unmapped is the unsafe case.
pub async fn revert_by_trust(
    registry: &dyn SourceRegistry,
    store: &dyn ItemStore,
    policy: &TrustPolicy,
) -> Result<ReclassifyReport> {
    let sources = registry.list_all().await?;
    let url_by_name: HashMap<&str, &str> = sources
        .iter()
        .map(|s| (s.name.as_str(), s.url.as_str()))
        .collect();

    let approved = store.list_approved().await?;
    let ids: Vec<Uuid> = approved
        .iter()
        .filter(|(_, source_name)| match url_by_name.get(source_name.as_str()) {
            Some(url) => !policy.is_trusted(url),
            None => true,
        })
        .map(|(id, _)| *id)
        .collect();

    info!(
        "{} of {} approved items are from untrusted or unknown sources",
        ids.len(),
        approved.len()
    );

    let items_changed = if ids.is_empty() {
        0
    } else {
        store.revert_to_pending(&ids).await?
    };

    Ok(ReclassifyReport {
        sources_inspected: sources.len(),
        items_changed,
    })
}
