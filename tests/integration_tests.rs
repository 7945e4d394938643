use cucumber::World;

pub mod common;
pub mod steps;

pub use common::world::CounterWorld;

/// # TapCounter Integration Tests - Headless Terminal Testing
///
/// Gherkin scenarios run against the real `AppController`, wired to
/// `MockEventStream`/`MockRenderStream` so no TTY is needed.
///
/// ```bash
/// cargo test --test integration_tests
/// ```
#[tokio::main]
async fn main() {
    #[allow(clippy::disallowed_methods)]
    let log_level = std::env::var("TAPCOUNTER_LOG_LEVEL")
        .unwrap_or_else(|_| "error".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        _ => tracing::Level::ERROR,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    run_features_sequentially().await;
}

/// Run each feature file on its own so failures are easy to place
async fn run_features_sequentially() {
    let features = [
        "features/application.feature",
        "features/counting.feature",
        "features/reset_dialog.feature",
        "features/split_mode.feature",
        "features/rendering.feature",
    ];

    for (i, feature) in features.iter().enumerate() {
        tracing::info!("[{}/{}] Starting {}", i + 1, features.len(), feature);
        CounterWorld::cucumber()
            .fail_on_skipped()
            .run_and_exit(feature)
            .await;
        tracing::info!("[{}/{}] Completed {}", i + 1, features.len(), feature);
    }
}
