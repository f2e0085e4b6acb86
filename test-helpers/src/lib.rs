pub mod mock;

use jiff::{SignedDuration, Timestamp};
use mock_api::{Config, Store, telemetry};
use payloads::{
    APIClient, AuctionId, AuctionStatus, ClientConfig, EventId, GalleryItemId,
    MemoryTokenStore, RuleId, ServiceError,
    responses::{ActiveEvent, AuctionSummary, GalleryItem, GeneralRule},
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

pub const ALICE: &str = "alice";
pub const ALICE_TOKEN: &str = "alice-dev-token";
pub const BOB: &str = "bob";
pub const BOB_TOKEN: &str = "bob-dev-token";

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub address: String,
    /// Backend state, for seeding data and inspecting requests.
    pub store: Store,
    /// Token store behind `client`; starts out logged out.
    pub tokens: Arc<MemoryTokenStore>,
    pub client: APIClient,
}

/// Session helpers
impl TestApp {
    pub fn login_alice(&self) {
        self.tokens.set(ALICE_TOKEN);
    }

    pub fn login_bob(&self) {
        self.tokens.set(BOB_TOKEN);
    }

    pub fn logout(&self) {
        self.tokens.clear();
    }

    /// The `Authorization` header of the last request the backend saw for
    /// `path`. Panics if no such request was made.
    pub fn last_authorization(&self, path: &str) -> Option<String> {
        self.store
            .last_request_to(path)
            .unwrap_or_else(|| panic!("no request was made to {path}"))
            .authorization
    }
}

/// Functions to populate test data
impl TestApp {
    /// One active, one upcoming and one ended auction, in that order.
    pub fn seed_auctions(&self) -> Vec<AuctionSummary> {
        let auctions = vec![
            auction_details("Kohaku 45cm Sakai", "Kohaku", AuctionStatus::Active, 6),
            auction_details("Showa 38cm Dainichi", "Showa", AuctionStatus::Upcoming, 48),
            auction_details("Sanke 50cm Momotaro", "Sanke", AuctionStatus::Ended, -24),
        ];
        for auction in &auctions {
            self.store.add_auction(auction.clone());
        }
        auctions
    }

    /// `count` gallery items, newest first in the returned list.
    pub fn seed_gallery(&self, count: usize) -> Vec<GalleryItem> {
        let varieties = ["Kohaku", "Showa", "Sanke", "Shiro Utsuri"];
        let now = Timestamp::now();
        let mut items: Vec<GalleryItem> = (0..count)
            .map(|i| {
                let variety = varieties[i % varieties.len()];
                gallery_item_details(
                    &format!("{variety} #{}", i + 1),
                    variety,
                    now - SignedDuration::from_hours(i as i64),
                )
            })
            .collect();
        for item in &items {
            self.store.add_gallery_item(item.clone());
        }
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    pub fn seed_content(&self) -> (Vec<GeneralRule>, ActiveEvent) {
        let rules = general_rules();
        let event = active_event_details();
        self.store.set_general_rules(rules.clone());
        self.store.set_active_event(Some(event.clone()));
        (rules, event)
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    spawn_app_with(Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    })
    .await
}

/// Start the mock api with the two known users registered.
pub async fn spawn_app_with(mut config: Config) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let store = Store::new();
    store.add_user(ALICE_TOKEN, ALICE);
    store.add_user(BOB_TOKEN, BOB);

    let server = mock_api::build(&mut config, store.clone())
        .expect("Failed to bind mock api");
    tokio::spawn(server);

    let address = format!("http://127.0.0.1:{}", config.port);
    let tokens = Arc::new(MemoryTokenStore::default());
    let client = APIClient::new(&ClientConfig::new(&address), tokens.clone());

    TestApp {
        port: config.port,
        address,
        store,
        tokens,
        client,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// An address nothing listens on, for simulating network failures.
pub fn unreachable_client() -> APIClient {
    APIClient::new(
        &ClientConfig::new("http://127.0.0.1:9"),
        Arc::new(payloads::NoTokenStore),
    )
}

/// Assert that a service call failed with exactly this message.
pub fn assert_service_error<T: std::fmt::Debug>(
    result: Result<T, ServiceError>,
    expected_message: &str,
) {
    match result {
        Err(e) => assert_eq!(e.message, expected_message),
        Ok(value) => panic!("Expected ServiceError, got {value:?}"),
    }
}

pub fn auction_details(
    title: &str,
    variety: &str,
    status: AuctionStatus,
    ends_in_hours: i64,
) -> AuctionSummary {
    let now = Timestamp::now();
    let end_at = now + SignedDuration::from_hours(ends_in_hours);
    let start_at = match status {
        AuctionStatus::Upcoming => end_at - SignedDuration::from_hours(24),
        _ => end_at - SignedDuration::from_hours(72),
    };
    let (bid_count, current_price) = match status {
        AuctionStatus::Upcoming => (0, Decimal::new(1_500_000, 0)),
        AuctionStatus::Active => (7, Decimal::new(3_250_000, 0)),
        AuctionStatus::Ended => (15, Decimal::new(8_000_000, 0)),
    };
    AuctionSummary {
        id: AuctionId(Uuid::new_v4()),
        title: title.to_string(),
        variety: variety.to_string(),
        size_cm: 45,
        breeder: "Sakai Fish Farm".to_string(),
        image_url: format!(
            "https://cdn.koi.test/auctions/{}.jpg",
            variety.to_lowercase().replace(' ', "-")
        ),
        opening_price: Decimal::new(1_500_000, 0),
        current_price,
        bid_count,
        status,
        start_at,
        end_at,
    }
}

pub fn gallery_item_details(
    title: &str,
    variety: &str,
    created_at: Timestamp,
) -> GalleryItem {
    GalleryItem {
        id: GalleryItemId(Uuid::new_v4()),
        title: title.to_string(),
        variety: variety.to_string(),
        size_cm: 40,
        image_url: format!(
            "https://cdn.koi.test/gallery/{}.jpg",
            title.to_lowercase().replace([' ', '#'], "-")
        ),
        description: Some(format!("{variety} pilihan dari kolam kami.")),
        created_at,
    }
}

pub fn general_rules() -> Vec<GeneralRule> {
    vec![
        GeneralRule {
            id: RuleId(Uuid::new_v4()),
            title: "Pembayaran".to_string(),
            content: "Pemenang wajib melunasi pembayaran **maksimal 2x24 jam** \
                      setelah lelang berakhir."
                .to_string(),
            position: 2,
        },
        GeneralRule {
            id: RuleId(Uuid::new_v4()),
            title: "Penawaran".to_string(),
            content: "Setiap penawaran bersifat mengikat dan tidak dapat \
                      dibatalkan."
                .to_string(),
            position: 1,
        },
    ]
}

pub fn active_event_details() -> ActiveEvent {
    let now = Timestamp::now();
    ActiveEvent {
        id: EventId(Uuid::new_v4()),
        name: "Festival Koi Nusantara".to_string(),
        description: "Lelang spesial koi impor selama satu minggu.".to_string(),
        start_at: now - SignedDuration::from_hours(24),
        end_at: now + SignedDuration::from_hours(144),
        banner_url: Some("https://cdn.koi.test/events/festival.jpg".to_string()),
    }
}
