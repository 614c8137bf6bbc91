// Prints the OpenAPI document of the error envelope.
// Run with: cargo run --bin schema_export

use anyhow::{Context, Result};
use guard_raise::{api::openapi::ErrorApiDoc, ErrorDefaults};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,guard_raise=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let defaults = ErrorDefaults::from_env().context("Failed to load error defaults")?;
    info!(
        error_code = %defaults.error_code,
        user_message = %defaults.user_message,
        "Error defaults loaded"
    );
    defaults.install();

    let doc = ErrorApiDoc::openapi();
    let json = serde_json::to_string_pretty(&doc).context("Failed to serialize OpenAPI spec")?;
    println!("{}", json);

    info!("OpenAPI specification generated");
    Ok(())
}
