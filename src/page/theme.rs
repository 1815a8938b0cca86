//! Dark/light theme preference, persisted in localStorage.
//!
//! Reads the stored value once at startup and applies a `data-theme`
//! attribute on the document element; the toggle control flips and persists
//! it. Persistence is best-effort: storage errors are ignored.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::THEME_STORAGE_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Anything other than the literal "dark" (including absence) is Light.
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The exact literal persisted to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

fn read_stored(win: &Window) -> Theme {
    if let Ok(Some(storage)) = win.local_storage() {
        if let Ok(Some(val)) = storage.get_item(THEME_STORAGE_KEY) {
            return Theme::from_stored(Some(&val));
        }
    }
    Theme::Light
}

fn persist(win: &Window, theme: Theme) {
    if let Ok(Some(storage)) = win.local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

// Applied visual state and the stored flag stay in lockstep: this runs
// immediately after every change.
fn apply(doc: &Document, theme: Theme) {
    if let Some(root) = doc.document_element() {
        match theme {
            Theme::Dark => {
                root.set_attribute("data-theme", "dark").ok();
            }
            Theme::Light => {
                root.remove_attribute("data-theme").ok();
            }
        }
    }
}

/// Read the persisted preference, apply it, and wire `#hf-theme-toggle`.
pub(crate) fn init(win: &Window, doc: &Document) -> Result<(), JsValue> {
    let current = Rc::new(Cell::new(read_stored(win)));
    apply(doc, current.get());

    let Some(control) = doc.get_element_by_id("hf-theme-toggle") else {
        // The stored preference still applies; only toggling is lost.
        super::warn_missing("hf-theme-toggle");
        return Ok(());
    };

    let win_click = win.clone();
    let doc_click = doc.clone();
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        let next = current.get().flipped();
        current.set(next);
        apply(&doc_click, next);
        persist(&win_click, next);
    }) as Box<dyn FnMut(_)>);
    control.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
