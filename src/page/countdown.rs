//! Countdown to the fixed target instant, re-rendered once a second.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::{COUNTDOWN_DONE_TEXT, COUNTDOWN_TARGET_MS};

pub const HOUR_MS: f64 = 3_600_000.0;
pub const DAY_MS: f64 = 86_400_000.0;

/// What the countdown region should show for a given pair of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownView {
    Remaining { days: u64, hours: u64 },
    Arrived,
}

/// Floor-divide the time left into whole days plus whole hours of the day
/// remainder. Any instant at or past the target is `Arrived`.
pub fn countdown_view(target_ms: f64, now_ms: f64) -> CountdownView {
    let diff = target_ms - now_ms;
    if diff <= 0.0 {
        return CountdownView::Arrived;
    }
    let days = (diff / DAY_MS).floor() as u64;
    let hours = ((diff % DAY_MS) / HOUR_MS).floor() as u64;
    CountdownView::Remaining { days, hours }
}

pub fn render(view: CountdownView) -> String {
    match view {
        CountdownView::Remaining { days, hours } => format!("{days} days {hours} hours"),
        CountdownView::Arrived => COUNTDOWN_DONE_TEXT.to_string(),
    }
}

// Wall clock in epoch milliseconds. timeOrigin + now() gives the absolute
// instant without pulling in extra bindings.
fn wall_clock_ms(win: &Window) -> f64 {
    win.performance()
        .map(|p| p.time_origin() + p.now())
        .unwrap_or(0.0)
}

/// Wire the 1-second ticker against `#hf-countdown`. Returns the interval
/// handle so the page can cancel it. Re-renders past the target are
/// idempotent, so the interval is left running.
pub(crate) fn init(win: &Window, doc: &Document) -> Result<Option<i32>, JsValue> {
    let Some(target) = doc.get_element_by_id("hf-countdown") else {
        super::warn_missing("hf-countdown");
        return Ok(None);
    };

    let win_tick = win.clone();
    let mut tick = move || {
        let view = countdown_view(COUNTDOWN_TARGET_MS, wall_clock_ms(&win_tick));
        target.set_text_content(Some(&render(view)));
    };
    // Paint immediately instead of waiting out the first second.
    tick();
    let closure = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
    let id = win
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            1000,
        )?;
    closure.forget();
    Ok(Some(id))
}
