use payloads::site::login_redirect;
use yew::prelude::*;

use crate::storage::current_search;

/// Sends the visitor to the home page, where the login dialog lives.
#[function_component]
pub fn LoginPage() -> Html {
    use_effect_with((), |_| {
        let target = login_redirect(&current_search());
        if let Some(window) = web_sys::window()
            && let Err(e) = window.location().replace(&target)
        {
            tracing::error!("Login redirect failed: {e:?}");
        }
    });

    html! {}
}
