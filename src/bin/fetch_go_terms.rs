//! Fetch the GO annotations of one UniProt ID and print the first few.
//!
//! Usage: `fetch-go-terms [ID] [COUNT]` (defaults: `P12345`, `3`).

use anyhow::{Context, Result};
use go_term_mapper::config::AppConfig;
use go_term_mapper::{AnnotationSource, QuickGoClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let mut args = std::env::args().skip(1);
    let id = args.next().unwrap_or_else(|| "P12345".to_string());
    let count: usize = match args.next() {
        Some(count) => count
            .parse()
            .with_context(|| format!("COUNT must be a number, got '{}'", count))?,
        None => 3,
    };

    let config = AppConfig::load()?;
    let client = QuickGoClient::new(config.upstream);

    let annotations = client
        .fetch_annotations(&id)
        .await
        .with_context(|| format!("Failed to fetch GO terms for {}", id))?;

    let shown: Vec<_> = annotations.iter().take(count).collect();
    println!("{}", serde_json::to_string_pretty(&shown)?);
    eprintln!("{} of {} annotations shown for {}", shown.len(), annotations.len(), id);

    Ok(())
}
