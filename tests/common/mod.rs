//! In-memory doubles for the registry, store and fetcher seams.
#![allow(dead_code)]

use ai_curator::traits::{FetchFeed, ItemStore, SourceRegistry};
use ai_curator::types::{
    CuratorError, FetchedItem, InsertOutcome, Item, NewItem, Result, Source,
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use uuid::Uuid;

pub fn source(name: &str, url: &str, tag: &str) -> Source {
    Source {
        id: Uuid::new_v4(),
        name: name.to_string(),
        url: url.to_string(),
        tag: tag.to_string(),
        is_active: true,
        created_at: Utc::now(),
    }
}

pub fn entry(title: &str, link: &str) -> FetchedItem {
    FetchedItem {
        title: title.to_string(),
        link: link.to_string(),
        published_at: None,
        snippet: None,
    }
}

pub struct MemoryRegistry {
    pub sources: Vec<Source>,
}

impl MemoryRegistry {
    pub fn new(sources: Vec<Source>) -> Self {
        Self { sources }
    }
}

#[async_trait]
impl SourceRegistry for MemoryRegistry {
    async fn list_active(&self) -> Result<Vec<Source>> {
        Ok(self
            .sources
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Source>> {
        Ok(self.sources.clone())
    }
}

/// Enforces the unique-url constraint the way the real store's index
/// does: a repeated url resolves to `Duplicate`.
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<Vec<Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> Vec<Item> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn insert(&self, item: NewItem) -> Result<InsertOutcome> {
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|existing| existing.url == item.url) {
            return Ok(InsertOutcome::Duplicate);
        }
        items.push(Item {
            id: Uuid::new_v4(),
            title: item.title,
            url: item.url,
            source: item.source,
            tag: item.tag,
            source_type: item.source_type,
            status: item.status,
            published_at: item.published_at,
            created_at: Utc::now(),
            approved_by: item.approved_by,
        });
        Ok(InsertOutcome::Inserted)
    }

    async fn approve_pending_from(
        &self,
        source_names: &[String],
        approved_by: &str,
    ) -> Result<u64> {
        let mut items = self.items.lock().unwrap();
        let mut changed = 0;
        for item in items.iter_mut() {
            if item.status == ai_curator::types::ItemStatus::Pending
                && source_names.contains(&item.source)
            {
                item.status = ai_curator::types::ItemStatus::Approved;
                item.approved_by = Some(approved_by.to_string());
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn list_approved(&self) -> Result<Vec<(Uuid, String)>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.status == ai_curator::types::ItemStatus::Approved)
            .map(|i| (i.id, i.source.clone()))
            .collect())
    }

    async fn revert_to_pending(&self, ids: &[Uuid]) -> Result<u64> {
        let ids: HashSet<&Uuid> = ids.iter().collect();
        let mut items = self.items.lock().unwrap();
        let mut changed = 0;
        for item in items.iter_mut() {
            if item.status == ai_curator::types::ItemStatus::Approved && ids.contains(&item.id) {
                item.status = ai_curator::types::ItemStatus::Pending;
                item.approved_by = None;
                changed += 1;
            }
        }
        Ok(changed)
    }
}

/// Serves canned feed documents by url; urls in `failing` simulate a
/// timed-out or unparsable feed.
#[derive(Default)]
pub struct StaticFetcher {
    feeds: HashMap<String, Vec<FetchedItem>>,
    failing: HashSet<String>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, url: &str, items: Vec<FetchedItem>) -> Self {
        self.feeds.insert(url.to_string(), items);
        self
    }

    pub fn with_failure(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }
}

#[async_trait]
impl FetchFeed for StaticFetcher {
    async fn fetch(&self, feed_url: &str) -> Result<Vec<FetchedItem>> {
        if self.failing.contains(feed_url) {
            return Err(CuratorError::General("connection timed out".to_string()));
        }
        Ok(self.feeds.get(feed_url).cloned().unwrap_or_default())
    }
}
