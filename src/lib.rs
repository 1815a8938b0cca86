//! Heartfall core crate.
//!
//! A single-page animated greeting: a typing intro, a countdown to the big
//! day, a persisted dark/light theme, a click-through list of reasons, and a
//! floating-heart canvas backdrop. All DOM and canvas glue lives in [`page`];
//! the component logic underneath is plain Rust so it runs under native
//! `cargo test`.

use wasm_bindgen::prelude::*;

pub mod page;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Fixed page content & configuration
// -----------------------------------------------------------------------------

/// Intro line revealed one character at a time.
pub const INTRO_TEXT: &str =
    "Hey you. I built this little corner of the internet just for us ♥";

/// Delay between revealed characters, in milliseconds.
pub const TYPE_DELAY_MS: i32 = 40;

/// Countdown target: 2026-02-14T00:00:00Z, in milliseconds since the epoch.
pub const COUNTDOWN_TARGET_MS: f64 = 1_771_027_200_000.0;

/// Shown once the target instant has passed.
pub const COUNTDOWN_DONE_TEXT: &str = "The day is finally here ♥";

/// Hearts drifting across the backdrop canvas.
pub const HEART_COUNT: usize = 80;

/// localStorage key holding the persisted theme ("dark" or "light").
pub const THEME_STORAGE_KEY: &str = "heartfall_theme";

/// Label the advance control takes once the last reason is on screen.
pub const LAST_REASON_LABEL: &str = "One more thing…";

/// Overlay message revealed after the last reason.
pub const FINALE_TEXT: &str =
    "…and a thousand more I haven't found the words for yet. I love you.";

/// The reasons, in reveal order. Order is significant; the on-screen counter
/// is 1-based.
pub const REASONS: &[&str] = &[
    "You laugh at your own jokes before you ever reach the punchline",
    "You make Sunday mornings feel like a small holiday",
    "You greet every dog on the street like an old friend",
    "You remember the tiny things I mention once and forget myself",
    "You sing the wrong lyrics with total confidence",
    "You always save me the last bite, even of your favorites",
    "You turn grocery runs into adventures",
    "You listen to the same story twice and still ask questions",
    "You dance in the kitchen while the kettle boils",
    "You believe in my plans before I believe in them",
    "You apologize to furniture when you bump into it",
    "You make terrible puns at exactly the right moment",
    "You keep a blanket ready for movie nights",
    "You notice when I go quiet and know which kind of quiet it is",
    "You chose me, and you keep choosing me",
];

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_page() -> Result<page::PageHandle, JsValue> {
    page::mount()
}
