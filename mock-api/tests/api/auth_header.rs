use payloads::{requests::PageQuery, services};
use test_helpers::{ALICE_TOKEN, BOB_TOKEN, spawn_app};

#[tokio::test]
async fn bearer_token_is_attached_when_present() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_content();
    app.login_alice();

    services::get_general_rules(&app.client).await?;
    assert_eq!(
        app.last_authorization("/general-rules"),
        Some(format!("Bearer {ALICE_TOKEN}"))
    );

    services::get_wishlist(&app.client, &PageQuery::default()).await?;
    assert_eq!(
        app.last_authorization("/wishlist"),
        Some(format!("Bearer {ALICE_TOKEN}"))
    );

    Ok(())
}

#[tokio::test]
async fn no_header_without_a_token() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_content();

    services::get_general_rules(&app.client).await?;
    services::get_active_event(&app.client).await?;

    for request in app.store.recorded_requests() {
        assert_eq!(request.authorization, None, "{}", request.path);
    }

    Ok(())
}

#[tokio::test]
async fn blank_token_counts_as_absent() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.tokens.set("");

    services::get_active_event(&app.client).await?;
    assert_eq!(app.last_authorization("/event/active"), None);

    Ok(())
}

#[tokio::test]
async fn token_is_read_on_every_request() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.login_alice();
    services::get_active_event(&app.client).await?;
    assert_eq!(
        app.last_authorization("/event/active"),
        Some(format!("Bearer {ALICE_TOKEN}"))
    );

    app.login_bob();
    services::get_active_event(&app.client).await?;
    assert_eq!(
        app.last_authorization("/event/active"),
        Some(format!("Bearer {BOB_TOKEN}"))
    );

    app.logout();
    services::get_active_event(&app.client).await?;
    assert_eq!(app.last_authorization("/event/active"), None);

    Ok(())
}

#[tokio::test]
async fn personal_endpoints_require_login() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result =
        services::get_my_auctions(&app.client, &Default::default()).await;
    let error = result.unwrap_err();
    assert_eq!(error.message, "Unauthorized: please login to continue");
    assert_eq!(error.code, Some(payloads::ErrorCode::Unauthorized));

    // an unknown token is no better than none
    app.tokens.set("forged");
    let error = services::get_wishlist(&app.client, &PageQuery::default())
        .await
        .unwrap_err();
    assert_eq!(error.code, Some(payloads::ErrorCode::Unauthorized));

    Ok(())
}
