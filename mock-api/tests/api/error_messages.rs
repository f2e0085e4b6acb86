use mock_api::{Endpoint, store::Failure};
use payloads::{
    AuctionId,
    notice::notice_for,
    requests::{GalleryQuery, PageQuery},
    services,
};
use test_helpers::{assert_service_error, spawn_app, unreachable_client};
use uuid::Uuid;

#[tokio::test]
async fn backend_message_is_surfaced() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.fail(
        Endpoint::Gallery,
        Failure::with_message(503, "Galeri sedang dalam perawatan"),
    );

    assert_service_error(
        services::get_gallery(&app.client, &GalleryQuery::default()).await,
        "Galeri sedang dalam perawatan",
    );

    Ok(())
}

#[tokio::test]
async fn fallback_when_backend_sends_no_message() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_alice();
    app.store.fail(Endpoint::GeneralRules, Failure::bare(500));
    app.store.fail(Endpoint::ActiveEvent, Failure::bare(502));
    app.store.fail(Endpoint::Auctions, Failure::bare(500));
    app.store.fail(Endpoint::MyAuctions, Failure::bare(500));
    app.store.fail(Endpoint::Gallery, Failure::bare(500));
    app.store.fail(Endpoint::Wishlist, Failure::bare(500));
    app.store.fail(Endpoint::AddToWishlist, Failure::bare(500));
    app.store.fail(Endpoint::RemoveFromWishlist, Failure::bare(500));

    let client = &app.client;
    let auction_id = AuctionId(Uuid::new_v4());
    assert_service_error(
        services::get_general_rules(client).await,
        services::GENERAL_RULES_FALLBACK,
    );
    assert_service_error(
        services::get_active_event(client).await,
        services::ACTIVE_EVENT_FALLBACK,
    );
    assert_service_error(
        services::get_auctions(client, &Default::default()).await,
        services::AUCTIONS_FALLBACK,
    );
    assert_service_error(
        services::get_my_auctions(client, &Default::default()).await,
        services::MY_AUCTIONS_FALLBACK,
    );
    assert_service_error(
        services::get_gallery(client, &Default::default()).await,
        services::GALLERY_FALLBACK,
    );
    assert_service_error(
        services::get_wishlist(client, &PageQuery::default()).await,
        services::WISHLIST_FALLBACK,
    );
    assert_service_error(
        services::add_to_wishlist(client, auction_id).await,
        services::ADD_TO_WISHLIST_FALLBACK,
    );
    assert_service_error(
        services::remove_from_wishlist(client, auction_id).await,
        services::REMOVE_FROM_WISHLIST_FALLBACK,
    );

    Ok(())
}

#[tokio::test]
async fn non_json_error_bodies_use_the_fallback() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.fail(
        Endpoint::ActiveEvent,
        Failure {
            status: 500,
            body: Some("<html>Bad Gateway</html>".to_string()),
        },
    );

    assert_service_error(
        services::get_active_event(&app.client).await,
        services::ACTIVE_EVENT_FALLBACK,
    );

    Ok(())
}

#[tokio::test]
async fn network_failures_use_the_fallback() {
    let client = unreachable_client();

    assert_service_error(
        services::get_general_rules(&client).await,
        services::GENERAL_RULES_FALLBACK,
    );
}

#[tokio::test]
async fn failures_clear() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_content();
    app.store.fail(Endpoint::GeneralRules, Failure::bare(500));
    assert!(services::get_general_rules(&app.client).await.is_err());

    app.store.clear_failures();
    let rules = services::get_general_rules(&app.client).await?;
    assert_eq!(rules.len(), 2);

    Ok(())
}

#[tokio::test]
async fn service_errors_map_to_notices() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_alice();

    let missing = AuctionId(Uuid::new_v4());
    let error = services::add_to_wishlist(&app.client, missing)
        .await
        .unwrap_err();
    assert_eq!(notice_for(&error).title, "Item Tidak Ditemukan");

    app.logout();
    let error = services::get_my_auctions(&app.client, &Default::default())
        .await
        .unwrap_err();
    assert_eq!(notice_for(&error).title, "Login Diperlukan");

    // no code, message only
    app.store.fail(
        Endpoint::Gallery,
        Failure::with_message(404, "Gallery page not found"),
    );
    let error = services::get_gallery(&app.client, &Default::default())
        .await
        .unwrap_err();
    assert_eq!(error.code, None);
    assert_eq!(notice_for(&error).title, "Item Tidak Ditemukan");

    Ok(())
}
