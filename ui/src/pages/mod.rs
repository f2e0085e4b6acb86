pub mod auctions;
pub mod gallery;
pub mod home;
pub mod login;
pub mod my_auctions;
pub mod not_found;
pub mod wishlist;

pub use auctions::AuctionsPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use my_auctions::MyAuctionsPage;
pub use not_found::NotFoundPage;
pub use wishlist::WishlistPage;
