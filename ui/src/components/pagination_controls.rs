use payloads::{requests::PageQuery, responses::PageMeta};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Pagination info of the page currently shown
    pub meta: PageMeta,
    /// Called with the page to switch to
    pub on_page_change: Callback<PageQuery>,
    /// Whether currently loading (to disable buttons)
    #[prop_or(false)]
    pub is_loading: bool,
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Props {
        meta, is_loading, ..
    } = *props;

    if meta.total_pages() <= 1 {
        return html! {};
    }

    let current = PageQuery::new(meta.page, meta.limit);

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit(current.previous());
        })
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit(current.next());
        })
    };

    let prev_disabled = !meta.has_previous() || is_loading;
    let next_disabled = !meta.has_next() || is_loading;

    let button_class = |disabled: bool| {
        if disabled {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-400 \
             dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
             cursor-not-allowed"
        } else {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-700 \
             dark:text-neutral-300 bg-white dark:bg-neutral-700 \
             hover:bg-neutral-50 dark:hover:bg-neutral-600 \
             transition-colors duration-200"
        }
    };

    html! {
        <div class="flex items-center justify-between mt-6 pt-4 \
                    border-t border-neutral-200 dark:border-neutral-700">
            <button
                onclick={on_previous}
                disabled={prev_disabled}
                class={button_class(prev_disabled)}
            >
                {"Sebelumnya"}
            </button>

            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("Halaman {} dari {}", meta.page, meta.total_pages())}
            </span>

            <button
                onclick={on_next}
                disabled={next_disabled}
                class={button_class(next_disabled)}
            >
                {"Berikutnya"}
            </button>
        </div>
    }
}
