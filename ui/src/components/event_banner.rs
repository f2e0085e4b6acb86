use payloads::responses::ActiveEvent;
use yew::prelude::*;

use super::CountdownTimer;
use crate::hooks::use_active_event;

/// Banner for the running event. Renders nothing when there is none or it
/// failed to load.
#[function_component]
pub fn EventBanner() -> Html {
    let event = use_active_event();

    match event.data.as_ref() {
        Some(Some(event)) => html! { <Banner event={event.clone()} /> },
        _ => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct BannerProps {
    event: ActiveEvent,
}

#[function_component]
fn Banner(props: &BannerProps) -> Html {
    let event = &props.event;

    html! {
        <section class="relative rounded-xl overflow-hidden mb-8 bg-neutral-900 text-white">
            if let Some(banner_url) = &event.banner_url {
                <img
                    src={banner_url.clone()}
                    alt={event.name.clone()}
                    class="absolute inset-0 w-full h-full object-cover opacity-40"
                />
            }
            <div class="relative p-8 space-y-2">
                <p class="text-xs uppercase tracking-wider">{"Event Berlangsung"}</p>
                <h2 class="text-3xl font-bold">{&event.name}</h2>
                <p class="max-w-2xl">{&event.description}</p>
                <p class="text-sm">
                    {"Berakhir dalam "}
                    <CountdownTimer target_time={event.end_at} />
                </p>
            </div>
        </section>
    }
}
