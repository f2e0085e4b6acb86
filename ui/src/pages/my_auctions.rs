use payloads::{products::format_price, requests::MyAuctionQuery, site::SitePage};
use yew::prelude::*;

use crate::components::{AuctionCard, PaginationControls, StatusFilter, TimestampDisplay};
use crate::contexts::toast::use_error_toast;
use crate::hooks::{use_my_auctions, use_title};

/// Auctions the visitor has bid on.
#[function_component]
pub fn MyAuctionsPage() -> Html {
    use_title(SitePage::MyAuctions);
    let query = use_state(MyAuctionQuery::default);
    let history = use_my_auctions((*query).clone());
    use_error_toast(history.error.clone());

    let on_status_change = {
        let query = query.clone();
        Callback::from(move |status| {
            query.set(MyAuctionQuery {
                status,
                page: Default::default(),
            });
        })
    };

    let on_page_change = {
        let query = query.clone();
        Callback::from(move |page| {
            query.set(MyAuctionQuery {
                page,
                ..(*query).clone()
            });
        })
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-3xl font-bold">{"Lelang Saya"}</h1>
                <StatusFilter value={query.status} on_change={on_status_change} />
            </div>
            {history.render("riwayat lelang", |page, is_loading| {
                if page.is_empty() {
                    return html! {
                        <p class="text-center py-12 text-neutral-500">
                            {"Anda belum mengikuti lelang apa pun."}
                        </p>
                    };
                }
                html! {
                    <>
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                            {for page.data.iter().map(|entry| {
                                let (label, class) = if entry.is_winning {
                                    ("Tertinggi", "text-green-700 dark:text-green-400")
                                } else {
                                    ("Terlampaui", "text-red-700 dark:text-red-400")
                                };
                                html! {
                                    <AuctionCard
                                        key={entry.auction.id.to_string()}
                                        auction={entry.auction.clone()}
                                    >
                                        <div class="mt-2 pt-2 border-t border-neutral-200 \
                                                    dark:border-neutral-700 text-sm space-y-1">
                                            <div class="flex justify-between">
                                                <span>{"Tawaran Anda"}</span>
                                                <span class="font-semibold">
                                                    {format_price(entry.my_highest_bid)}
                                                </span>
                                            </div>
                                            <div class="flex justify-between text-xs">
                                                <TimestampDisplay timestamp={entry.last_bid_at} />
                                                <span class={class}>{label}</span>
                                            </div>
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
