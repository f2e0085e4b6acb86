use jiff::{Timestamp, tz::TimeZone};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub timestamp: Timestamp,
}

/// A timestamp in the visitor's local time zone, e.g. `12 Jun 2025, 19:30`.
#[function_component]
pub fn TimestampDisplay(props: &Props) -> Html {
    let zoned = props.timestamp.to_zoned(TimeZone::system());
    html! {
        <time datetime={props.timestamp.to_string()}>
            {zoned.strftime("%d %b %Y, %H:%M").to_string()}
        </time>
    }
}
