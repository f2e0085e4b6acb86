use yew::prelude::*;

use super::MarkdownText;
use crate::{contexts::toast::use_error_toast, hooks::use_general_rules};

#[function_component]
pub fn GeneralRules() -> Html {
    let rules = use_general_rules();
    use_error_toast(rules.error.clone());

    html! {
        <section class="mb-12">
            <h2 class="text-2xl font-semibold mb-4">{"Aturan Umum Lelang"}</h2>
            {rules.render("aturan umum", |rules, _| {
                if rules.is_empty() {
                    return html! {
                        <p class="text-neutral-500">{"Belum ada aturan."}</p>
                    };
                }
                html! {
                    <ol class="space-y-4">
                        {for rules.iter().map(|rule| html! {
                            <li key={rule.id.to_string()}>
                                <h3 class="font-medium">{&rule.title}</h3>
                                <MarkdownText text={rule.content.clone()} />
                            </li>
                        })}
                    </ol>
                }
            })}
        </section>
    }
}
