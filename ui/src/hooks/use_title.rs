use payloads::site::SitePage;
use yew::prelude::*;

const SITE_NAME: &str = "Lelang Koi";

/// Sets the document title. No cleanup on unmount since each page sets its own
/// title, and unmount/mount ordering isn't guaranteed during route transitions.
#[hook]
pub fn use_title(page: SitePage) {
    let title = match page {
        SitePage::Home => SITE_NAME.to_string(),
        _ => format!("{} | {SITE_NAME}", page.title()),
    };
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
