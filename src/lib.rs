//! Single-page portfolio site.
//!
//! The widget state machines below compile everywhere and carry all of the
//! page behaviour; the `wasm` module only exists on `wasm32` and wires them to
//! the DOM.

pub mod carousel;
pub mod config;
pub mod content;
pub mod embed;
pub mod error;
pub mod nav;
pub mod particles;
pub mod popup;
pub mod typewriter;

pub use config::SiteConfig;
pub use error::PortfolioError;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    pub mod carousel;
    pub mod dom;
    pub mod embed;
    pub mod frame;
    pub mod nav;
    pub mod page;
    pub mod popup;
    pub mod render;
    pub mod typewriter;

    thread_local! {
        static PAGE: RefCell<Option<page::Page>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        console_log::init_with_level(level).ok();

        let page = page::Page::mount()?;
        PAGE.with(|cell| *cell.borrow_mut() = Some(page));
        Ok(())
    }

    /// Stops every animation, timer and listener and unloads the embed script.
    #[wasm_bindgen]
    pub fn unmount() {
        if PAGE.with(|cell| cell.borrow_mut().take()).is_some() {
            log::info!("page unmounted");
        }
    }
}
