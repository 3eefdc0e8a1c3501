//! Looping greeting recorder.
//!
//! Repeats the write/read-back sequence unboundedly with a fixed pause
//! between iterations. The store connection is opened once and shared by
//! every iteration; the first store error terminates the process.

use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use greeting_recorder::config::AppConfig;
use greeting_recorder::observability::logging;
use greeting_recorder::recorder::GreetingRecorder;
use greeting_recorder::store::RedisStore;

#[derive(Parser, Debug)]
#[command(about = "Record greetings forever with a fixed pause")]
struct Args {
    /// Pause between iterations, in seconds.
    #[arg(long, default_value_t = 5)]
    interval_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let args = Args::parse();

    let config = AppConfig::from_env()?;
    tracing::info!(
        project_id = %config.project_id,
        store_url = %config.store.url,
        interval_secs = args.interval_secs,
        "configuration loaded"
    );

    let store = RedisStore::connect(&config).await?;
    let mut recorder = GreetingRecorder::new(store, config.time_zone, StdRng::from_entropy());

    recorder
        .run_forever(Duration::from_secs(args.interval_secs))
        .await?;

    Ok(())
}
