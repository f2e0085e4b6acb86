use payloads::products::{Product, ProductCategory, format_rupiah, products};
use yew::prelude::*;

/// The fixed shop catalog with a category switcher.
#[function_component]
pub fn ProductCatalog() -> Html {
    let category = use_state(|| None::<ProductCategory>);

    let tab = |value: Option<ProductCategory>, label: &'static str| {
        let category = category.clone();
        let is_active = *category == value;
        let onclick = Callback::from(move |_: MouseEvent| category.set(value));
        let class = if is_active {
            "px-3 py-1 rounded-full text-sm bg-neutral-900 text-white \
             dark:bg-white dark:text-neutral-900"
        } else {
            "px-3 py-1 rounded-full text-sm bg-neutral-100 text-neutral-700 \
             dark:bg-neutral-800 dark:text-neutral-300"
        };
        html! { <button {onclick} class={class}>{label}</button> }
    };

    html! {
        <section>
            <h2 class="text-2xl font-semibold mb-4">{"Produk"}</h2>
            <div class="flex gap-2 mb-4">
                {tab(None, "Semua")}
                {for ProductCategory::ALL.iter().map(|c| tab(Some(*c), c.label()))}
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {for products(*category).into_iter().map(|product| html! {
                    <ProductTile key={product.id} product={*product} />
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TileProps {
    product: Product,
}

#[function_component]
fn ProductTile(props: &TileProps) -> Html {
    let product = &props.product;
    html! {
        <div class="rounded-lg border border-neutral-200 dark:border-neutral-700 p-3">
            <img src={product.image} alt={product.name} class="w-full h-40 object-cover rounded" />
            <p class="mt-2 text-sm font-medium">{product.name}</p>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {format_rupiah(product.price)}
            </p>
        </div>
    }
}
