//! WebAssembly entry point of the site.
//!
//! Hydrates the server-rendered markup so the header's menu toggle, scroll
//! styling and client-side navigation become interactive.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the Leptos application on the client-side.
///
/// Installs `console_log` and `console_error_panic_hook` for debugging, then
/// mounts `app::component` onto the existing DOM.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("hydrating {} routes", app::routes::ROUTES.len());
    leptos::mount::hydrate_body(component);
}
