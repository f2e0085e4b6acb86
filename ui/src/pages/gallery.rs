use payloads::{requests::GalleryQuery, site::SitePage};
use yew::prelude::*;

use crate::components::{GalleryCard, PaginationControls};
use crate::contexts::toast::use_error_toast;
use crate::hooks::{use_gallery, use_title};

#[function_component]
pub fn GalleryPage() -> Html {
    use_title(SitePage::Gallery);
    let query = use_state(GalleryQuery::default);
    let gallery = use_gallery((*query).clone());
    use_error_toast(gallery.error.clone());

    let on_page_change = {
        let query = query.clone();
        Callback::from(move |page| {
            query.set(GalleryQuery {
                page,
                ..(*query).clone()
            });
        })
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold mb-6">{"Galeri Koi"}</h1>
            {gallery.render("galeri", |page, is_loading| {
                if page.is_empty() {
                    return html! {
                        <p class="text-center py-12 text-neutral-500">
                            {"Belum ada koi di galeri."}
                        </p>
                    };
                }
                html! {
                    <>
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                            {for page.data.iter().map(|item| html! {
                                <GalleryCard key={item.id.to_string()} item={item.clone()} />
                            })}
                        </div>
                        <PaginationControls
                            meta={page.meta}
                            on_page_change={on_page_change.clone()}
                            {is_loading}
                        />
                    </>
                }
            })}
        </div>
    }
}
