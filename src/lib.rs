pub mod types;
pub mod classifier;
pub mod trust;
pub mod traits;
pub mod fetcher;
pub mod store;
pub mod ingest;
pub mod reclassify;
pub mod seed;
pub mod config;

pub use types::*;
pub use classifier::is_relevant;
pub use trust::TrustPolicy;
pub use traits::{FetchFeed, ItemStore, SourceRegistry};
pub use fetcher::Fetcher;
pub use store::PgStore;
pub use ingest::Ingestor;
pub use reclassify::{promote_by_trust, revert_by_trust};
pub use config::CuratorConfig;
