//! Operator seeding of the source registry with the default roster.

use crate::store::PgStore;
use crate::types::Result;
use tracing::info;

/// The starter roster: `(name, url, tag)`.
pub const DEFAULT_SOURCES: &[(&str, &str, &str)] = &[
    ("The Verge", "https://www.theverge.com/rss/index.xml", "global"),
    ("VentureBeat AI", "https://venturebeat.com/category/ai/feed/", "global"),
    (
        "The Guardian AI",
        "https://www.theguardian.com/technology/artificialintelligenceai/rss",
        "global",
    ),
    ("Ars Technica", "https://feeds.arstechnica.com/arstechnica/index", "global"),
    ("OpenAI Blog", "https://openai.com/news/rss.xml", "global"),
    ("Anthropic", "https://www.anthropic.com/index.xml", "global"),
    ("Engadget", "https://www.engadget.com/rss.xml", "global"),
    (
        "ScienceDaily AI",
        "https://www.sciencedaily.com/rss/computers_math/artificial_intelligence.xml",
        "global",
    ),
    (
        "TechCabal AI",
        "https://techcabal.com/category/artificial-intelligence/feed/",
        "africa",
    ),
    (
        "TechPoint AI",
        "https://techpoint.africa/subject/artificial-intelligence/feed/",
        "africa",
    ),
];

/// Insert the default sources, skipping any whose url is already
/// registered. Returns `(added, skipped)`.
pub async fn seed_sources(store: &PgStore) -> Result<(usize, usize)> {
    let mut added = 0;
    let mut skipped = 0;

    for (name, url, tag) in DEFAULT_SOURCES {
        if store.add_source(name, url, tag).await? {
            info!("Added source: {}", name);
            added += 1;
        } else {
            info!("Skipping {} (already exists)", name);
            skipped += 1;
        }
    }

    Ok((added, skipped))
}
