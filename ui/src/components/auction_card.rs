use payloads::{AuctionStatus, products::format_price, responses::AuctionSummary};
use yew::prelude::*;

use super::{CountdownTimer, TimestampDisplay};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub auction: AuctionSummary,
    /// Extra content under the details, e.g. a wishlist button or the
    /// visitor's own bid.
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn AuctionCard(props: &Props) -> Html {
    let auction = &props.auction;

    let (badge_class, timing) = match auction.status {
        AuctionStatus::Upcoming => (
            "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200",
            html! {
                <>{"Mulai "}<TimestampDisplay timestamp={auction.start_at} /></>
            },
        ),
        AuctionStatus::Active => (
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
            html! {
                <>{"Berakhir dalam "}<CountdownTimer target_time={auction.end_at} /></>
            },
        ),
        AuctionStatus::Ended => (
            "bg-neutral-100 text-neutral-700 dark:bg-neutral-700 dark:text-neutral-200",
            html! {
                <>{"Berakhir "}<TimestampDisplay timestamp={auction.end_at} /></>
            },
        ),
    };

    html! {
        <div class="rounded-lg border border-neutral-200 dark:border-neutral-700 \
                    overflow-hidden bg-white dark:bg-neutral-800">
            <img
                src={auction.image_url.clone()}
                alt={auction.title.clone()}
                loading="lazy"
                class="w-full h-56 object-cover"
            />
            <div class="p-4 space-y-2">
                <div class="flex items-start justify-between gap-2">
                    <h3 class="font-semibold">{&auction.title}</h3>
                    <span class={classes!("px-2", "py-0.5", "rounded", "text-xs", badge_class)}>
                        {auction.status.label()}
                    </span>
                </div>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {format!("{} · {} cm · {}", auction.variety, auction.size_cm, auction.breeder)}
                </p>
                <div class="flex justify-between text-sm">
                    <span>{"Harga saat ini"}</span>
                    <span class="font-semibold">{format_price(auction.current_price)}</span>
                </div>
                <div class="flex justify-between text-xs text-neutral-500 dark:text-neutral-400">
                    <span>{format!("{} penawaran", auction.bid_count)}</span>
                    <span>{timing}</span>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
