//! Renders backend-supplied markdown, such as the general rules.
//!
//! Raw HTML in the source is escaped rather than rendered.

use pulldown_cmark::{Event, Options, Parser, html};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn MarkdownText(props: &Props) -> Html {
    let html_content = render_markdown(&props.text);

    let classes = classes!(
        "prose",
        "prose-neutral",
        "dark:prose-invert",
        "prose-sm",
        "max-w-none",
        "prose-p:my-2",
        "prose-ul:my-2",
        "prose-ol:my-2",
        props.class.clone()
    );

    html! {
        <div class={classes}>
            { Html::from_html_unchecked(html_content.into()) }
        </div>
    }
}

fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        event => event,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
