//! TTL Cache demo host
//!
//! Builds a cache, runs a janitor next to it, and shows a value expiring.

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_cache::{Cache, Config};

/// Entry point for the demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache and start its janitor
/// 4. Store a value, read it back, wait past its TTL and read it again
/// 5. Log statistics, stop the janitor and wait for it to exit
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: janitor_interval={}s, default_ttl={}s",
        config.janitor_interval, config.default_ttl
    );

    let cache = Cache::new();
    let stop = CancellationToken::new();
    let janitor = cache.start_janitor(config.janitor_interval(), stop.clone());

    cache.put("hello", b"world", config.default_ttl());

    match cache.get("hello") {
        Ok(value) => info!("value: {}", String::from_utf8_lossy(&value)),
        Err(err) => warn!("unexpected miss: {}", err),
    }

    let wait = config.expiry_wait();
    tokio::time::sleep(wait).await;

    // Either the janitor already swept it (NotFound) or this read expires it
    match cache.get("hello") {
        Ok(value) => warn!("still present: {}", String::from_utf8_lossy(&value)),
        Err(err) => info!("after {:?}: {}", wait, err),
    }

    let stats = serde_json::to_string(&cache.stats()).context("serializing cache stats")?;
    info!("stats: {}", stats);

    stop.cancel();
    janitor.await.context("janitor task failed")?;

    info!("Shutdown complete");
    Ok(())
}
