use ai_curator::ingest::Ingestor;
use ai_curator::reclassify::{promote_by_trust, revert_by_trust};
use ai_curator::seed::seed_sources;
use ai_curator::types::{FetchConfig, InsertOutcome, NewItem};
use ai_curator::{CuratorConfig, Fetcher, ItemStore, PgStore, TrustPolicy};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "ai-curator", about = "Feed ingestion and trust-policy pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch all active sources and store relevant items
    Ingest {
        /// Emit the run report as JSON instead of a progress log
        #[arg(long)]
        json: bool,
        /// Override the trusted-domain allow-list (repeatable)
        #[arg(long = "trust")]
        trust: Vec<String>,
    },
    /// Approve pending items from currently trusted sources
    Promote {
        #[arg(long = "trust")]
        trust: Vec<String>,
    },
    /// Revert approved items whose sources are no longer trusted
    Revert {
        #[arg(long = "trust")]
        trust: Vec<String>,
    },
    /// Register the default source roster
    Seed,
    /// Add a single item manually (stored approved, no classification)
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        #[arg(long)]
        source: String,
        #[arg(long, default_value = "global")]
        tag: String,
        /// Who entered the item; recorded as the approver
        #[arg(long)]
        by: Option<String>,
    },
}

fn policy_from(trust: Vec<String>) -> TrustPolicy {
    if trust.is_empty() {
        TrustPolicy::default()
    } else {
        TrustPolicy::new(trust)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Missing credentials or an unreachable store abort here, before
    // any source is touched.
    let config = CuratorConfig::from_env()?;
    let store = PgStore::connect(&config).await?;

    match cli.command {
        Command::Ingest { json, trust } => {
            let fetch_config = FetchConfig::default();
            let fetcher = Fetcher::new(&fetch_config);
            let ingestor = Ingestor::new(&fetcher, &store, policy_from(trust), fetch_config);

            let report = ingestor.run(&store).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for result in &report.results {
                    match &result.error {
                        Some(e) => println!("{}: failed: {}", result.source, e),
                        None => println!(
                            "{}: {} added, {} skipped",
                            result.source, result.added, result.skipped
                        ),
                    }
                }
                println!(
                    "Done. {} sources processed, {} items added in {}ms",
                    report.sources_processed, report.total_added, report.duration_ms
                );
            }
        }
        Command::Promote { trust } => {
            let report = promote_by_trust(&store, &store, &policy_from(trust)).await?;
            println!(
                "Inspected {} sources, approved {} items",
                report.sources_inspected, report.items_changed
            );
        }
        Command::Revert { trust } => {
            let report = revert_by_trust(&store, &store, &policy_from(trust)).await?;
            println!(
                "Inspected {} sources, reverted {} items to pending",
                report.sources_inspected, report.items_changed
            );
        }
        Command::Seed => {
            let (added, skipped) = seed_sources(&store).await?;
            println!("Seeded sources: {} added, {} skipped", added, skipped);
        }
        Command::Add {
            title,
            url,
            source,
            tag,
            by,
        } => {
            let item = NewItem::manual(title, url.clone(), source, tag, by);
            match store.insert(item).await? {
                InsertOutcome::Inserted => {
                    info!("Stored manual item: {}", url);
                    println!("Added item: {}", url);
                }
                InsertOutcome::Duplicate => println!("Item already exists: {}", url),
            }
        }
    }

    Ok(())
}
