pub mod auction_card;
pub mod countdown_timer;
pub mod event_banner;
pub mod gallery_card;
pub mod general_rules;
pub mod layout;
pub mod markdown_text;
pub mod pagination_controls;
pub mod product_catalog;
pub mod status_filter;
pub mod timestamp_display;
pub mod toast;

pub use auction_card::AuctionCard;
pub use countdown_timer::CountdownTimer;
pub use event_banner::EventBanner;
pub use gallery_card::GalleryCard;
pub use general_rules::GeneralRules;
pub use markdown_text::MarkdownText;
pub use pagination_controls::PaginationControls;
pub use product_catalog::ProductCatalog;
pub use status_filter::StatusFilter;
pub use timestamp_display::TimestampDisplay;
pub use toast::ToastContainer;
