//! Typing intro: reveals the fixed greeting one character per tick.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::{INTRO_TEXT, TYPE_DELAY_MS};

/// Cursor over a fixed string, advanced one `char` at a time.
pub struct Typer {
    text: &'static str,
    cursor: usize,
}

impl Typer {
    pub fn new(text: &'static str) -> Self {
        Self { text, cursor: 0 }
    }

    /// Reveal one more character and return the visible prefix, or `None`
    /// once the whole string is out. Cursor always lands on a UTF-8 char
    /// boundary.
    pub fn step(&mut self) -> Option<&'static str> {
        let next = self.text[self.cursor..].chars().next()?;
        self.cursor += next.len_utf8();
        Some(&self.text[..self.cursor])
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.text.len()
    }
}

type TickCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Start the reveal chain against `#hf-intro`. The chain reschedules itself
/// every tick and simply stops once the string is exhausted.
pub(crate) fn init(win: &Window, doc: &Document) -> Result<(), JsValue> {
    let Some(target) = doc.get_element_by_id("hf-intro") else {
        super::warn_missing("hf-intro");
        return Ok(());
    };

    let mut typer = Typer::new(INTRO_TEXT);
    let f: TickCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win_tick = win.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(prefix) = typer.step() {
            // Text content only; raw markup never reaches the page.
            target.set_text_content(Some(prefix));
            if !typer.is_done() {
                let _ = win_tick.set_timeout_with_callback_and_timeout_and_arguments_0(
                    f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    TYPE_DELAY_MS,
                );
            }
        }
    }) as Box<dyn FnMut()>));
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
        TYPE_DELAY_MS,
    )?;
    Ok(())
}
