use payloads::responses::GalleryItem;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub item: GalleryItem,
}

#[function_component]
pub fn GalleryCard(props: &Props) -> Html {
    let item = &props.item;

    html! {
        <figure class="rounded-lg overflow-hidden border border-neutral-200 \
                       dark:border-neutral-700 bg-white dark:bg-neutral-800">
            <img
                src={item.image_url.clone()}
                alt={item.title.clone()}
                loading="lazy"
                class="w-full h-64 object-cover"
            />
            <figcaption class="p-3 space-y-1">
                <p class="font-medium">{&item.title}</p>
                <p class="text-xs text-neutral-500 dark:text-neutral-400">
                    {format!("{} · {} cm", item.variety, item.size_cm)}
                </p>
                if let Some(description) = &item.description {
                    <p class="text-sm text-neutral-600 dark:text-neutral-300">
                        {description}
                    </p>
                }
            </figcaption>
        </figure>
    }
}
