//! Reason carousel: a click-through sequence over the fixed reason list.
//!
//! The deck is a small state machine (`Idle -> Active -> Exhausted`, no way
//! back) kept free of DOM types; the wiring at the bottom translates its
//! events into text updates and reveals.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::{FINALE_TEXT, LAST_REASON_LABEL, REASONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPhase {
    Idle,
    Active,
    Exhausted,
}

/// What a click produced. `Ignored` covers every out-of-phase call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEvent {
    Show {
        text: &'static str,
        /// 1-based position for the "N / total" counter.
        shown: usize,
        total: usize,
        /// Set when this is the final reason; the driver relabels the
        /// advance control.
        last: bool,
    },
    Finale,
    Ignored,
}

pub struct ReasonDeck {
    reasons: &'static [&'static str],
    index: usize,
    phase: DeckPhase,
}

impl ReasonDeck {
    pub fn new(reasons: &'static [&'static str]) -> Self {
        Self {
            reasons,
            index: 0,
            phase: DeckPhase::Idle,
        }
    }

    pub fn phase(&self) -> DeckPhase {
        self.phase
    }

    /// `Idle -> Active`. Shows reason #1 and pre-advances the pointer in the
    /// same step, so the visible counter starts at "1 / N".
    pub fn start(&mut self) -> DeckEvent {
        if !matches!(self.phase, DeckPhase::Idle) {
            return DeckEvent::Ignored;
        }
        if self.reasons.is_empty() {
            self.phase = DeckPhase::Exhausted;
            return DeckEvent::Finale;
        }
        self.phase = DeckPhase::Active;
        self.index = 0;
        self.emit_next()
    }

    /// Next reason while any remain; the call after the last one reveals the
    /// finale exactly once and ends the sequence.
    pub fn advance(&mut self) -> DeckEvent {
        if !matches!(self.phase, DeckPhase::Active) {
            return DeckEvent::Ignored;
        }
        if self.index >= self.reasons.len() {
            self.phase = DeckPhase::Exhausted;
            return DeckEvent::Finale;
        }
        self.emit_next()
    }

    fn emit_next(&mut self) -> DeckEvent {
        let text = self.reasons[self.index];
        self.index += 1;
        DeckEvent::Show {
            text,
            shown: self.index,
            total: self.reasons.len(),
            last: self.index == self.reasons.len(),
        }
    }
}

// --- DOM wiring --------------------------------------------------------------

fn reveal(doc: &Document, id: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.remove_attribute("hidden").ok();
    }
}

fn apply_event(doc: &Document, next: &Element, event: DeckEvent) {
    match event {
        DeckEvent::Show {
            text,
            shown,
            total,
            last,
        } => {
            if let Some(el) = doc.get_element_by_id("hf-reason") {
                el.set_text_content(Some(text));
            }
            if let Some(el) = doc.get_element_by_id("hf-reason-counter") {
                el.set_text_content(Some(&format!("{shown} / {total}")));
            }
            if last {
                next.set_text_content(Some(LAST_REASON_LABEL));
            }
        }
        DeckEvent::Finale => {
            if let Some(el) = doc.get_element_by_id("hf-finale") {
                el.set_text_content(Some(FINALE_TEXT));
                el.remove_attribute("hidden").ok();
            }
        }
        DeckEvent::Ignored => {}
    }
}

/// Wire `#hf-start` and `#hf-next`. Display regions are looked up per event;
/// a missing one just never updates.
pub(crate) fn init(doc: &Document) -> Result<(), JsValue> {
    let Some(start) = doc.get_element_by_id("hf-start") else {
        super::warn_missing("hf-start");
        return Ok(());
    };
    let Some(next) = doc.get_element_by_id("hf-next") else {
        super::warn_missing("hf-next");
        return Ok(());
    };
    for id in ["hf-reasons", "hf-reason", "hf-reason-counter", "hf-finale"] {
        if doc.get_element_by_id(id).is_none() {
            super::warn_missing(id);
        }
    }

    let deck = Rc::new(RefCell::new(ReasonDeck::new(REASONS)));

    {
        let deck_start = deck.clone();
        let doc_start = doc.clone();
        let next_el = next.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            let event = deck_start.borrow_mut().start();
            if matches!(event, DeckEvent::Ignored) {
                return;
            }
            reveal(&doc_start, "hf-reasons");
            next_el.remove_attribute("hidden").ok();
            apply_event(&doc_start, &next_el, event);
        }) as Box<dyn FnMut(_)>);
        start.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let deck_next = deck.clone();
        let doc_next = doc.clone();
        let next_el = next.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            let event = deck_next.borrow_mut().advance();
            apply_event(&doc_next, &next_el, event);
        }) as Box<dyn FnMut(_)>);
        next.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
