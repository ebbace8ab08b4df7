//! Avalon Game Viewer
//!
//! Client-side Yew app over the data tree published by `avalon-prep`: a
//! tournament and game selector beside a step-through view of one recorded
//! game, plus a character guide. Components render on the server too, which is
//! how the tests exercise them.
#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod paths;
pub mod router;

/// Wasm entry point.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    yew::Renderer::<app::App>::new().render();
}
