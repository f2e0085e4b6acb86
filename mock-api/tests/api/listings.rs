use payloads::{
    AuctionStatus,
    requests::{AuctionQuery, GalleryQuery, MyAuctionQuery, PageQuery},
    services,
};
use rust_decimal::Decimal;
use test_helpers::{ALICE, BOB, spawn_app};

#[tokio::test]
async fn general_rules_come_back_in_position_order() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_content();

    let rules = services::get_general_rules(&app.client).await?;
    let positions: Vec<_> = rules.iter().map(|rule| rule.position).collect();
    assert_eq!(positions, vec![1, 2]);
    assert_eq!(rules[0].title, "Penawaran");

    Ok(())
}

#[tokio::test]
async fn active_event_may_be_absent() -> anyhow::Result<()> {
    let app = spawn_app().await;
    assert_eq!(services::get_active_event(&app.client).await?, None);

    let (_, event) = app.seed_content();
    assert_eq!(services::get_active_event(&app.client).await?, Some(event));

    Ok(())
}

#[tokio::test]
async fn auctions_filter_by_status_and_variety() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let seeded = app.seed_auctions();

    let all = services::get_auctions(&app.client, &AuctionQuery::default())
        .await?;
    assert_eq!(all.meta.total, 3);
    // soonest closing first
    assert_eq!(all.data[0].id, seeded[2].id);

    let active = services::get_auctions(
        &app.client,
        &AuctionQuery {
            status: Some(AuctionStatus::Active),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(active.data.len(), 1);
    assert_eq!(active.data[0].id, seeded[0].id);

    let showa = services::get_auctions(
        &app.client,
        &AuctionQuery {
            variety: Some("showa".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(showa.data.len(), 1);
    assert_eq!(showa.data[0].variety, "Showa");

    let search = services::get_auctions(
        &app.client,
        &AuctionQuery {
            search: Some("momotaro".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(search.data.len(), 1);
    assert_eq!(search.data[0].status, AuctionStatus::Ended);

    Ok(())
}

#[tokio::test]
async fn gallery_paginates_newest_first() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let items = app.seed_gallery(30);

    let first = services::get_gallery(&app.client, &GalleryQuery::default())
        .await?;
    assert_eq!(first.data.len(), 12);
    assert_eq!(first.data[0].id, items[0].id);
    assert_eq!(first.meta.total, 30);
    assert_eq!(first.meta.total_pages(), 3);
    assert!(first.meta.has_next());
    assert!(!first.meta.has_previous());

    let last = services::get_gallery(
        &app.client,
        &GalleryQuery {
            page: PageQuery::default().next().next(),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(last.data.len(), 6);
    assert_eq!(last.data.last().map(|item| item.id), items.last().map(|item| item.id));
    assert!(!last.meta.has_next());

    let kohaku = services::get_gallery(
        &app.client,
        &GalleryQuery {
            variety: Some("Kohaku".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(kohaku.meta.total, 8);
    assert!(kohaku.data.iter().all(|item| item.variety == "Kohaku"));

    Ok(())
}

#[tokio::test]
async fn empty_gallery_is_not_an_error() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let page =
        services::get_gallery(&app.client, &GalleryQuery::default()).await?;
    assert!(page.is_empty());
    assert_eq!(page.meta.total_pages(), 0);

    Ok(())
}

#[tokio::test]
async fn my_auctions_only_show_own_bids() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let seeded = app.seed_auctions();
    let now = jiff::Timestamp::now();
    app.store.record_bid(
        ALICE,
        seeded[0].id,
        Decimal::new(3_250_000, 0),
        now,
        true,
    )?;
    app.store.record_bid(
        ALICE,
        seeded[2].id,
        Decimal::new(7_000_000, 0),
        now - jiff::SignedDuration::from_hours(30),
        false,
    )?;
    app.store.record_bid(
        BOB,
        seeded[2].id,
        Decimal::new(8_000_000, 0),
        now - jiff::SignedDuration::from_hours(25),
        true,
    )?;

    app.login_alice();
    let mine =
        services::get_my_auctions(&app.client, &MyAuctionQuery::default())
            .await?;
    assert_eq!(mine.meta.total, 2);
    // most recent bid first
    assert_eq!(mine.data[0].auction.id, seeded[0].id);
    assert!(mine.data[0].is_winning);
    assert!(!mine.data[1].is_winning);

    let ended = services::get_my_auctions(
        &app.client,
        &MyAuctionQuery {
            status: Some(AuctionStatus::Ended),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(ended.data.len(), 1);
    assert_eq!(ended.data[0].my_highest_bid, Decimal::new(7_000_000, 0));

    app.login_bob();
    let bobs =
        services::get_my_auctions(&app.client, &MyAuctionQuery::default())
            .await?;
    assert_eq!(bobs.data.len(), 1);

    Ok(())
}
