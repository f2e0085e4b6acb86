use gloo_timers::future::sleep;
use jiff::Timestamp;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub target_time: Timestamp,
    /// Shown once the target time has passed
    #[prop_or(AttrValue::Static("Selesai"))]
    pub finished_label: AttrValue,
}

/// Ticks down to `target_time` once a second.
#[function_component]
pub fn CountdownTimer(props: &Props) -> Html {
    let remaining = use_state(|| remaining_until(props.target_time));

    {
        let remaining = remaining.clone();

        use_effect_with(props.target_time, move |&target_time| {
            remaining.set(remaining_until(target_time));

            let cancelled = Rc::new(AtomicBool::new(false));
            let cancelled_clone = cancelled.clone();

            spawn_local(async move {
                while !cancelled_clone.load(Ordering::Relaxed) {
                    sleep(Duration::from_secs(1)).await;
                    if cancelled_clone.load(Ordering::Relaxed) {
                        break;
                    }
                    let left = remaining_until(target_time);
                    remaining.set(left);
                    if left.is_none() {
                        break;
                    }
                }
            });

            move || {
                cancelled.store(true, Ordering::Relaxed);
            }
        });
    }

    let text = match *remaining {
        Some(seconds) => format_remaining(seconds),
        None => props.finished_label.to_string(),
    };

    html! {
        <span class="font-mono">{text}</span>
    }
}

/// Whole seconds left, or `None` once the target has passed.
fn remaining_until(target: Timestamp) -> Option<i64> {
    let seconds = target.duration_since(Timestamp::now()).as_secs();
    (seconds > 0).then_some(seconds)
}

fn format_remaining(total_seconds: i64) -> String {
    let days = total_seconds / 86400;
    let hours = (total_seconds % 86400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if days > 0 {
        format!("{days}h {hours:02}j {minutes:02}m")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_drop_the_seconds() {
        assert_eq!(format_remaining(2 * 86400 + 3 * 3600 + 5 * 60 + 9), "2h 03j 05m");
        assert_eq!(format_remaining(3600 + 61), "01:01:01");
        assert_eq!(format_remaining(59), "00:00:59");
    }
}
