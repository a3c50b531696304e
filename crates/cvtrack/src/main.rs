mod config;
mod event;
mod handlers;
mod state;
mod storage;

use std::sync::Arc;

use lambda_runtime::{service_fn, LambdaEvent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, event::GatewayEvent, state::AppState};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cvtrack=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Required environment is validated before the runtime starts; a
    // missing variable fails the cold start.
    let config = Config::from_env()?;

    let state = init_state(&config).await;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<GatewayEvent>| {
        let state = state.clone();
        async move { Ok::<_, lambda_runtime::Error>(handlers::handle(&state, event.payload).await) }
    }))
    .await
}

/// Build the application state with the storage backend selected at
/// compile time.
///
/// The repository handle is created once per process (cold start) and
/// shared read-only across invocations.
#[cfg(feature = "dynamodb")]
async fn init_state(config: &Config) -> AppState {
    let repository = storage::DynamoDbRepository::from_env(&config.table_name).await;
    tracing::info!(table = %config.table_name, "using DynamoDB storage backend");
    AppState::new(Arc::new(repository))
}

#[cfg(not(feature = "dynamodb"))]
async fn init_state(config: &Config) -> AppState {
    tracing::warn!(
        table = %config.table_name,
        "dynamodb feature disabled, using in-memory storage backend"
    );
    AppState::new(Arc::new(storage::InMemoryRepository::new()))
}
