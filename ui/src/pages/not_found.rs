use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center py-16">
            <h1 class="text-4xl font-bold text-neutral-900 dark:text-white">{"404"}</h1>
            <p class="text-neutral-600 dark:text-neutral-300 mb-4">{"Halaman tidak ditemukan"}</p>
            <Link<Route> to={Route::Home} classes="text-sm underline">
                {"Kembali ke beranda"}
            </Link<Route>>
        </div>
    }
}
