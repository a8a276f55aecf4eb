use leaderboard_loader::cache::{Cache, MemoryCache, NoCache};
use leaderboard_loader::client::HttpFetcher;
use leaderboard_loader::config::SETTINGS;
use leaderboard_loader::loader::DataLoader;

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = &SETTINGS;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(settings.get_trace_level())
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    let fetcher = HttpFetcher::new(Duration::from_secs(settings.http_timeout_sec))?;

    let cache: Arc<dyn Cache> = match settings.no_cache {
        true => Arc::new(NoCache),
        false => Arc::new(MemoryCache::new()),
    };

    let loader = DataLoader::new(settings.loader_config(), Arc::new(fetcher), cache);

    info!("Loading leaderboard data from {}.", loader.config().url());
    let payload = loader.handle_loaded_data().await?;

    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
