//! Single-shot greeting recorder.
//!
//! Writes one record to the store, reads it back, prints it, and exits.
//! Any store or configuration error terminates the process.

use rand::rngs::StdRng;
use rand::SeedableRng;

use greeting_recorder::config::AppConfig;
use greeting_recorder::observability::logging;
use greeting_recorder::recorder::GreetingRecorder;
use greeting_recorder::store::RedisStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    println!("Hello, Kubernetes Novice!");

    let config = AppConfig::from_env()?;
    tracing::info!(
        project_id = %config.project_id,
        store_url = %config.store.url,
        time_zone = %config.time_zone,
        "configuration loaded"
    );

    let store = RedisStore::connect(&config).await?;
    let mut recorder = GreetingRecorder::new(store, config.time_zone, StdRng::from_entropy());

    let record = recorder.record_once().await?;
    println!("Fetched entity: {} ({})", record.value, record.created_at);

    Ok(())
}
