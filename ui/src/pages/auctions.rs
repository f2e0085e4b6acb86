use payloads::{requests::AuctionQuery, site::SitePage};
use yew::prelude::*;

use crate::components::{AuctionCard, PaginationControls, StatusFilter};
use crate::contexts::toast::use_error_toast;
use crate::hooks::{use_auctions, use_title, use_wishlist_actions};

#[function_component]
pub fn AuctionsPage() -> Html {
    use_title(SitePage::Auctions);
    let query = use_state(AuctionQuery::default);
    let auctions = use_auctions((*query).clone());
    let wishlist = use_wishlist_actions();
    use_error_toast(auctions.error.clone());

    let on_status_change = {
        let query = query.clone();
        Callback::from(move |status| {
            // a new filter starts from the first page
            query.set(AuctionQuery {
                status,
                page: Default::default(),
                ..(*query).clone()
            });
        })
    };

    let on_page_change = {
        let query = query.clone();
        Callback::from(move |page| {
            query.set(AuctionQuery {
                page,
                ..(*query).clone()
            });
        })
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-3xl font-bold">{"Lelang"}</h1>
                <StatusFilter value={query.status} on_change={on_status_change} />
            </div>
            {auctions.render("lelang", |page, is_loading| {
                if page.is_empty() {
                    return html! {
                        <p class="text-center py-12 text-neutral-500">
                            {"Tidak ada lelang."}
                        </p>
                    };
                }
                html! {
                    <>
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                            {for page.data.iter().map(|auction| {
                                let on_wish = {
                                    let add = wishlist.add.clone();
                                    let id = auction.id;
                                    Callback::from(move |_: MouseEvent| add.emit(id))
                                };
                                html! {
                                    <AuctionCard key={auction.id.to_string()} auction={auction.clone()}>
                                        <button
                                            onclick={on_wish}
                                            class="w-full mt-2 px-3 py-2 rounded-md text-sm \
                                                   border border-neutral-300 dark:border-neutral-600 \
                                                   hover:bg-neutral-50 dark:hover:bg-neutral-700"
                                        >
                                            {"♡ Tambah ke Wishlist"}
                                        </button>
                                    </AuctionCard>
                                }
                            })}
                        </div>
                        <PaginationControls
                            meta={page.meta}
                            on_page_change={on_page_change.clone()}
                            {is_loading}
                        />
                    </>
                }
            })}
        </div>
    }
}
