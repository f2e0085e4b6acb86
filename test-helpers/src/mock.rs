//! Development dataset for the dev-server.
//!
//! Populates the mock backend with a realistic spread of data:
//! - auctions in every state across several varieties
//! - a gallery large enough to paginate
//! - general rules and a running event
//! - bid history and a wishlist for alice

use crate::{ALICE, ALICE_TOKEN, BOB_TOKEN, TestApp, auction_details};
use anyhow::Result;
use jiff::{SignedDuration, Timestamp};
use payloads::{AuctionStatus, responses::AuctionSummary};
use rust_decimal::Decimal;

const AUCTIONS: &[(&str, &str, AuctionStatus, i64)] = &[
    ("Kohaku Jumbo 65cm", "Kohaku", AuctionStatus::Active, 3),
    ("Showa Sansai 52cm", "Showa", AuctionStatus::Active, 9),
    ("Shiro Utsuri 48cm", "Shiro Utsuri", AuctionStatus::Active, 20),
    ("Tancho Kohaku 35cm", "Kohaku", AuctionStatus::Active, 30),
    ("Goshiki 40cm", "Goshiki", AuctionStatus::Active, 44),
    ("Asagi 42cm", "Asagi", AuctionStatus::Upcoming, 60),
    ("Kujaku 38cm", "Kujaku", AuctionStatus::Upcoming, 84),
    ("Sanke Nisai 44cm", "Sanke", AuctionStatus::Upcoming, 96),
    ("Showa Tosai 25cm", "Showa", AuctionStatus::Ended, -6),
    ("Kohaku Sansai 55cm", "Kohaku", AuctionStatus::Ended, -30),
];

pub struct DevDataset {
    pub auctions: Vec<AuctionSummary>,
    pub gallery_items: usize,
}

impl DevDataset {
    pub fn create(app: &TestApp) -> Result<Self> {
        tracing::info!("📜 Publishing general rules and the active event");
        app.seed_content();

        tracing::info!("🐟 Creating auctions");
        let auctions: Vec<AuctionSummary> = AUCTIONS
            .iter()
            .map(|(title, variety, status, ends_in)| {
                let auction = auction_details(title, variety, *status, *ends_in);
                app.store.add_auction(auction.clone());
                auction
            })
            .collect();

        tracing::info!("🖼️ Filling the gallery");
        let gallery_items = app.seed_gallery(30).len();

        tracing::info!("🔨 Recording bids and wishlist entries for {ALICE}");
        let now = Timestamp::now();
        for (i, auction) in auctions.iter().enumerate().step_by(2) {
            let is_winning = i % 4 == 0;
            let bid = if is_winning {
                auction.current_price
            } else {
                auction.current_price - Decimal::new(100_000, 0)
            };
            app.store.record_bid(
                ALICE,
                auction.id,
                bid,
                now - SignedDuration::from_hours(i as i64 + 1),
                is_winning,
            )?;
        }
        for auction in auctions
            .iter()
            .filter(|a| a.status != AuctionStatus::Ended)
            .skip(1)
            .take(3)
        {
            app.store.add_to_wishlist(ALICE, auction.id, now)?;
        }

        Ok(Self {
            auctions,
            gallery_items,
        })
    }

    pub fn print_summary(&self) {
        let count = |status: AuctionStatus| {
            self.auctions.iter().filter(|a| a.status == status).count()
        };
        tracing::info!("📊 Dataset summary:");
        tracing::info!(
            "   Auctions: {} active, {} upcoming, {} ended",
            count(AuctionStatus::Active),
            count(AuctionStatus::Upcoming),
            count(AuctionStatus::Ended),
        );
        tracing::info!("   Gallery items: {}", self.gallery_items);
        tracing::info!("   Tokens (localStorage \"authToken\"):");
        tracing::info!("     alice: {ALICE_TOKEN}");
        tracing::info!("     bob:   {BOB_TOKEN}");
    }
}
