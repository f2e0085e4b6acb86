use payloads::{requests::PageQuery, site::SitePage};
use yew::prelude::*;

use crate::components::{AuctionCard, PaginationControls, TimestampDisplay};
use crate::contexts::toast::use_error_toast;
use crate::hooks::{use_title, use_wishlist, use_wishlist_actions};

#[function_component]
pub fn WishlistPage() -> Html {
    use_title(SitePage::Wishlist);
    let page_query = use_state(PageQuery::default);
    let wishlist = use_wishlist(*page_query);
    let actions = use_wishlist_actions();
    use_error_toast(wishlist.error.clone());

    let on_page_change = {
        let page_query = page_query.clone();
        Callback::from(move |page| page_query.set(page))
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold mb-6">{"Wishlist"}</h1>
            {wishlist.render("wishlist", |page, is_loading| {
                if page.is_empty() {
                    return html! {
                        <p class="text-center py-12 text-neutral-500">
                            {"Wishlist Anda masih kosong."}
                        </p>
                    };
                }
                html! {
                    <>
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                            {for page.data.iter().map(|item| {
                                let on_remove = {
                                    let remove = actions.remove.clone();
                                    let id = item.auction.id;
                                    Callback::from(move |_: MouseEvent| remove.emit(id))
                                };
                                html! {
                                    <AuctionCard
                                        key={item.auction.id.to_string()}
                                        auction={item.auction.clone()}
                                    >
                                        <div class="flex items-center justify-between mt-2 text-xs">
                                            <span>
                                                {"Ditambahkan "}
                                                <TimestampDisplay timestamp={item.added_at} />
                                            </span>
                                            <button
                                                onclick={on_remove}
                                                class="px-3 py-1 rounded-md text-red-700 \
                                                       dark:text-red-400 border border-red-200 \
                                                       dark:border-red-800 hover:bg-red-50 \
                                                       dark:hover:bg-red-900/20"
                                            >
                                                {"Hapus"}
                                            </button>
                                        </div>
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
