use payloads::{APIClient, ClientConfig};
use std::sync::Arc;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod contexts;
pub mod hooks;
mod logs;
pub mod pages;
pub mod state;
pub mod storage;

use components::{ToastContainer, layout::MainLayout};
use contexts::toast::ToastProvider;
pub use logs::init_logging;
pub use state::State;

/// API client for the backend configured at build time.
///
/// `NEXT_PUBLIC_BACKEND_BASE_URL` (or `BACKEND_BASE_URL`) is baked in by
/// trunk; without either the client talks to the local development backend.
pub fn get_api_client() -> APIClient {
    let config = ClientConfig::from_options(
        option_env!("NEXT_PUBLIC_BACKEND_BASE_URL"),
        option_env!("BACKEND_BASE_URL"),
    );
    APIClient::new(&config, Arc::new(storage::LocalStorageTokenStore))
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
                <ToastContainer />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/galeri")]
    Gallery,
    #[at("/lelang")]
    Auctions,
    #[at("/lelang-saya")]
    MyAuctions,
    #[at("/wishlist")]
    Wishlist,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <pages::HomePage /> },
        Route::Gallery => html! { <pages::GalleryPage /> },
        Route::Auctions => html! { <pages::AuctionsPage /> },
        Route::MyAuctions => html! { <pages::MyAuctionsPage /> },
        Route::Wishlist => html! { <pages::WishlistPage /> },
        Route::Login => html! { <pages::LoginPage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}
