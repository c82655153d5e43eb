use super::{commands, dispatch};
use anyhow::Result;
use chrono::Utc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Main orchestrator - Pure orchestration with no business logic
///
/// Four-step data flow:
/// 1. Parse: Extract CLI arguments
/// 2. Initialize Telemetry: Set up the operator-facing log stream
/// 3. Dispatch: Convert `ArgMatches` into typed Action enum
/// 4. Execute: Run the action's business logic
///
/// # Errors
///
/// Returns an error if any step in the flow fails
pub async fn start() -> Result<()> {
    // 1. Parse: Extract CLI arguments
    let matches = commands::new().get_matches();

    // 2. Initialize Telemetry
    init_telemetry();

    // 3. Dispatch: Convert ArgMatches into typed Action enum
    let action = dispatch::dispatch(&matches, Utc::now().date_naive())?;

    // 4. Execute: Run the action's business logic
    action.execute().await?;

    Ok(())
}

/// Process-wide logging, initialized once at start-up. All issued SQL text
/// and server-reported outcome lines go through this stream at info level.
fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}
