use payloads::{
    AuctionId, ErrorCode,
    notice::{NoticeKind, notice_for},
    requests::PageQuery,
    services,
};
use test_helpers::spawn_app;
use uuid::Uuid;

#[tokio::test]
async fn add_then_remove() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let seeded = app.seed_auctions();
    app.login_alice();

    let item = services::add_to_wishlist(&app.client, seeded[0].id).await?;
    assert_eq!(item.auction.id, seeded[0].id);
    services::add_to_wishlist(&app.client, seeded[1].id).await?;

    let wishlist =
        services::get_wishlist(&app.client, &PageQuery::default()).await?;
    let ids: Vec<_> = wishlist.data.iter().map(|i| i.auction.id).collect();
    // most recently added first
    assert_eq!(ids, vec![seeded[1].id, seeded[0].id]);

    let removed =
        services::remove_from_wishlist(&app.client, seeded[0].id).await?;
    assert_eq!(removed.message, "Dihapus dari wishlist");

    let wishlist =
        services::get_wishlist(&app.client, &PageQuery::default()).await?;
    assert_eq!(wishlist.meta.total, 1);

    let request = app
        .store
        .last_request_to(&format!("/wishlist/{}", seeded[0].id))
        .expect("delete was sent");
    assert_eq!(request.method, "DELETE");

    Ok(())
}

#[tokio::test]
async fn wishlists_are_per_user() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let seeded = app.seed_auctions();

    app.login_alice();
    services::add_to_wishlist(&app.client, seeded[0].id).await?;

    app.login_bob();
    let wishlist =
        services::get_wishlist(&app.client, &PageQuery::default()).await?;
    assert!(wishlist.is_empty());

    // bob may add the same auction
    services::add_to_wishlist(&app.client, seeded[0].id).await?;

    Ok(())
}

#[tokio::test]
async fn duplicate_add_is_already_exists() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let seeded = app.seed_auctions();
    app.login_alice();

    services::add_to_wishlist(&app.client, seeded[0].id).await?;
    let error = services::add_to_wishlist(&app.client, seeded[0].id)
        .await
        .unwrap_err();

    assert_eq!(error.message, "Auction already exists in wishlist");
    assert_eq!(error.code, Some(ErrorCode::AlreadyExists));
    let notice = notice_for(&error);
    assert_eq!(notice.kind, NoticeKind::AlreadyExists);
    assert_eq!(notice.title, "Sudah Ada");

    Ok(())
}

#[tokio::test]
async fn ended_auctions_cannot_be_wishlisted() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let seeded = app.seed_auctions();
    app.login_alice();

    let error = services::add_to_wishlist(&app.client, seeded[2].id)
        .await
        .unwrap_err();

    assert_eq!(error.code, Some(ErrorCode::AuctionEnded));
    let notice = notice_for(&error);
    assert_eq!(notice.kind, NoticeKind::AuctionEnded);
    assert_eq!(notice.title, "Lelang Telah Berakhir");

    Ok(())
}

#[tokio::test]
async fn removing_unknown_item_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_auctions();
    app.login_alice();

    let error =
        services::remove_from_wishlist(&app.client, AuctionId(Uuid::new_v4()))
            .await
            .unwrap_err();

    assert_eq!(error.message, "Wishlist item not found");
    assert_eq!(notice_for(&error).kind, NoticeKind::NotFound);

    Ok(())
}

#[tokio::test]
async fn wishlist_requires_login() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let seeded = app.seed_auctions();

    let error = services::add_to_wishlist(&app.client, seeded[0].id)
        .await
        .unwrap_err();
    assert_eq!(notice_for(&error).kind, NoticeKind::LoginRequired);
    assert_eq!(app.last_authorization("/wishlist"), None);

    Ok(())
}
