use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_ITEMS: &[(&str, Route)] = &[
    ("Beranda", Route::Home),
    ("Lelang", Route::Auctions),
    ("Galeri", Route::Gallery),
    ("Lelang Saya", Route::MyAuctions),
    ("Wishlist", Route::Wishlist),
];

#[function_component]
pub fn Header() -> Html {
    let current = use_route::<Route>();

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="text-xl font-semibold text-neutral-900 dark:text-white">
                        {"Lelang Koi"}
                    </Link<Route>>
                    <nav class="flex items-center space-x-4">
                        {for NAV_ITEMS.iter().map(|(label, route)| {
                            let classes = if current.as_ref() == Some(route) {
                                "text-sm font-medium text-neutral-900 dark:text-white"
                            } else {
                                "text-sm text-neutral-600 dark:text-neutral-400 \
                                 hover:text-neutral-900 dark:hover:text-white"
                            };
                            html! {
                                <Link<Route> to={route.clone()} {classes}>
                                    {*label}
                                </Link<Route>>
                            }
                        })}
                    </nav>
                </div>
            </div>
        </header>
    }
}
