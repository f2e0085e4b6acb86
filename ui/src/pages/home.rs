use payloads::site::{SitePage, query_flag};
use yew::prelude::*;

use crate::components::{EventBanner, GeneralRules, ProductCatalog};
use crate::contexts::toast::use_toast;
use crate::hooks::use_title;
use crate::storage::current_search;

#[function_component]
pub fn HomePage() -> Html {
    use_title(SitePage::Home);
    let toast = use_toast();

    // Flags set by the /login redirect
    use_effect_with((), move |_| {
        let search = current_search();
        if query_flag(&search, "verified") {
            toast.success("Email berhasil diverifikasi. Silakan masuk.");
        } else if query_flag(&search, "openLogin") {
            toast.info("Silakan masuk untuk melanjutkan.");
        }
    });

    html! {
        <>
            <EventBanner />
            <GeneralRules />
            <ProductCatalog />
        </>
    }
}
