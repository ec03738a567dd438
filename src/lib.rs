#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod error;
pub mod meteors;
pub mod roles;
pub mod site;
pub mod theme;
pub mod timers;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }
    leptos::mount::hydrate_body(App);
}
