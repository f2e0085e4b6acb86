//! Development backend for UI work
//!
//! Serves the mock api with a realistic dataset on the port the UI expects
//! by default (1728), so `trunk serve` works without any configuration.
//!
//! Usage: cargo run -p dev-server
//! IP_ADDRESS, PORT and ALLOWED_ORIGINS are honored as for the mock api.

use anyhow::Result;
use test_helpers::mock::DevDataset;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = mock_api::telemetry::get_subscriber("info".into());
    mock_api::telemetry::init_subscriber(subscriber)?;

    let config = mock_api::Config::from_env()?;

    info!("🚀 Starting koi auction development backend");
    let app = test_helpers::spawn_app_with(config).await;
    info!("✅ Mock API running on {}", app.address);

    info!("📊 Setting up development data...");
    let dataset = DevDataset::create(&app)?;

    info!("🎯 Development backend ready!");
    info!("   API: {}", app.address);
    info!("   UI:  cd ui && NEXT_PUBLIC_BACKEND_BASE_URL={} trunk serve", app.address);
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development backend");
    Ok(())
}
