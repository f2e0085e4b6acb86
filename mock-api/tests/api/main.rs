mod auth_header;
mod error_messages;
mod listings;
mod wishlist;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = app.client.get("health_check").await?;
    assert!(response.status().is_success());

    Ok(())
}
