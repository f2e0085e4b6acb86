use prerender::{Config, client, generate, revalidate};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!("Backend: {}", config.client.base_url);

    if std::env::args().any(|arg| arg == "--watch") {
        tracing::info!(
            "Revalidating every {}s",
            config.revalidate_every.as_secs()
        );
        revalidate(&config).await
    } else {
        generate(&config, &client(&config)).await
    }
}
