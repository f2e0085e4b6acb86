fn main() {
    ui::init_logging();
    #[cfg(target_arch = "wasm32")]
    ui::hooks::hydrate_gallery();
    yew::Renderer::<ui::App>::new().render();
}
