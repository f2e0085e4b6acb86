pub mod api_client;
pub mod error;
pub mod notice;
pub mod products;
pub mod query;
pub mod requests;
pub mod responses;
pub mod services;
pub mod site;
pub mod token;

pub use api_client::{APIClient, ClientConfig, ClientError};
pub use error::{ErrorCode, ServiceError};
pub use token::{MemoryTokenStore, NoTokenStore, TokenStore};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
pub struct AuctionId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
pub struct GalleryItemId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
pub struct EventId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
pub struct RuleId(pub Uuid);

/// Lifecycle of an auction as reported by the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    #[display("upcoming")]
    Upcoming,
    #[display("active")]
    Active,
    #[display("ended")]
    Ended,
}

impl AuctionStatus {
    pub const ALL: [AuctionStatus; 3] =
        [Self::Upcoming, Self::Active, Self::Ended];

    /// Indonesian label shown in filters and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => "Akan Datang",
            Self::Active => "Berlangsung",
            Self::Ended => "Selesai",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.to_string() == value)
    }
}
