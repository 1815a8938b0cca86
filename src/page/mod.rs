//! Page wiring: DOM lookups, event listeners, and the per-frame canvas loop.
//!
//! Every component initializes independently and shares nothing but the
//! visual surface. A missing surface element disables that one component (a
//! warning names the element id); only the absence of the `window`/`document`
//! globals fails [`mount`] outright.

use wasm_bindgen::prelude::*;
use web_sys::window;

pub mod carousel;
pub mod countdown;
pub mod hearts;
pub mod theme;
pub mod typing;

/// Handle returned by `start_page`. Owns every cancellation surface the page
/// has: the heart loop's stop flag and the countdown interval id. The typing
/// chain terminates on its own and needs no hook.
#[wasm_bindgen]
pub struct PageHandle {
    hearts: Option<hearts::HeartsHandle>,
    countdown_interval: Option<i32>,
}

#[wasm_bindgen]
impl PageHandle {
    /// Stop the heart animation and the countdown ticker. Idempotent.
    pub fn stop(&self) {
        if let Some(h) = &self.hearts {
            h.stop();
        }
        if let Some(id) = self.countdown_interval {
            if let Some(win) = window() {
                win.clear_interval_with_handle(id);
            }
        }
    }
}

pub fn mount() -> Result<PageHandle, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    theme::init(&win, &doc)?;
    typing::init(&win, &doc)?;
    let countdown_interval = countdown::init(&win, &doc)?;
    carousel::init(&doc)?;
    let hearts = hearts::init(&win, &doc)?;

    Ok(PageHandle {
        hearts,
        countdown_interval,
    })
}

/// One warning per missing surface element; the component degrades silently
/// afterwards.
pub(crate) fn warn_missing(id: &str) {
    web_sys::console::warn_1(&format!("heartfall: #{id} not found, feature disabled").into());
}
