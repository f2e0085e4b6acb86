use payloads::AuctionStatus;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: Option<AuctionStatus>,
    pub on_change: Callback<Option<AuctionStatus>>,
}

/// Status dropdown; the empty option means every status.
#[function_component]
pub fn StatusFilter(props: &Props) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            on_change.emit(AuctionStatus::parse(&select.value()));
        })
    };

    html! {
        <select
            {onchange}
            class="px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
                   rounded-md text-sm bg-white dark:bg-neutral-800"
        >
            <option value="" selected={props.value.is_none()}>{"Semua Status"}</option>
            {for AuctionStatus::ALL.iter().map(|status| html! {
                <option
                    value={status.to_string()}
                    selected={props.value == Some(*status)}
                >
                    {status.label()}
                </option>
            })}
        </select>
    }
}
