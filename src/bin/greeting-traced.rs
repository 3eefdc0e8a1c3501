//! Traced greeting recorder.
//!
//! Runs the single-shot sequence inside a span pair and exports spans to an
//! OTLP collector through a batching exporter. The exporter is flushed when
//! the guard drops at process exit.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Instrument;

use greeting_recorder::config::AppConfig;
use greeting_recorder::observability::telemetry;
use greeting_recorder::recorder::GreetingRecorder;
use greeting_recorder::store::RedisStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    let _guard = telemetry::init(&config.telemetry)?;

    tracing::info!(
        project_id = %config.project_id,
        store_url = %config.store.url,
        "configuration loaded"
    );

    let record = async {
        tracing::info!("start");
        let store = RedisStore::connect(&config).await?;
        let mut recorder =
            GreetingRecorder::new(store, config.time_zone, StdRng::from_entropy());
        let record = recorder.record_once().await?;
        tracing::info!("finish");
        Ok::<_, Box<dyn std::error::Error>>(record)
    }
    .instrument(tracing::info_span!("record_greeting"))
    .await?;

    println!("Fetched entity: {} ({})", record.value, record.created_at);

    Ok(())
}
