//! Floating-heart backdrop: a fixed pool of glyphs drifting up a canvas.
//!
//! Pool state and motion live in [`HeartField`], which holds no DOM types so
//! the recycle rule can be tested off-browser. The wasm side owns the
//! requestAnimationFrame chain and redraws the whole field every frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window, window};

use crate::HEART_COUNT;

// --- Pool state --------------------------------------------------------------

/// One drifting heart. Position mutates every frame; size, speed and opacity
/// are fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heart {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
}

// Simple linear-congruential generator; decorative drift does not need more
// (not crypto secure).
struct Lcg(u32);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.0 as f64 / (u32::MAX as f64 + 1.0)
    }

    fn in_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

pub struct HeartField {
    hearts: Vec<Heart>,
    width: f64,
    height: f64,
    count: usize,
    rng: Lcg,
}

impl HeartField {
    pub fn new(count: usize, width: f64, height: f64, seed: u32) -> Self {
        let mut field = Self {
            hearts: Vec::new(),
            width,
            height,
            count,
            rng: Lcg(seed),
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        self.hearts.clear();
        self.hearts.reserve(self.count);
        for _ in 0..self.count {
            let heart = Heart {
                x: self.rng.in_range(0.0, self.width),
                y: self.rng.in_range(0.0, self.height),
                size: self.rng.in_range(2.0, 6.0),
                speed: self.rng.in_range(0.5, 1.5),
                opacity: self.rng.in_range(0.3, 0.8),
            };
            self.hearts.push(heart);
        }
    }

    /// Discard the whole pool and regenerate it against new bounds. Runs on
    /// every canvas resize; old positions are not carried over.
    pub fn reset(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    /// Advance every heart one frame: drift upward by `speed`; a heart that
    /// left through the top re-enters from the bottom edge at a fresh
    /// random x.
    pub fn step(&mut self) {
        for h in &mut self.hearts {
            if h.y < 0.0 {
                h.y = self.height;
                h.x = self.rng.in_range(0.0, self.width);
            } else {
                h.y -= h.speed;
            }
        }
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

// --- Canvas driver -----------------------------------------------------------

const HEART_COLOR: &str = "#ff5e8a";

/// Stop flag for the frame chain; once set, the loop does not reschedule.
#[derive(Clone)]
pub struct HeartsHandle {
    stopped: Rc<Cell<bool>>,
}

impl HeartsHandle {
    pub fn stop(&self) {
        self.stopped.set(true);
    }
}

fn viewport(win: &Window) -> (f64, f64) {
    let w = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(640.0);
    let h = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(480.0);
    (w, h)
}

fn draw(ctx: &CanvasRenderingContext2d, field: &HeartField) {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    ctx.set_fill_style_str(HEART_COLOR);
    ctx.set_text_align("center");
    for h in field.hearts() {
        ctx.set_global_alpha(h.opacity);
        ctx.set_font(&format!("{}px serif", (h.size * 4.0) as i32));
        ctx.fill_text("♥", h.x, h.y).ok();
    }
    ctx.set_global_alpha(1.0);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Set up the canvas, the resize listener and the frame chain. A missing
/// canvas disables the whole subsystem and nothing else.
pub(crate) fn init(win: &Window, doc: &Document) -> Result<Option<HeartsHandle>, JsValue> {
    let Some(el) = doc.get_element_by_id("hf-hearts-canvas") else {
        super::warn_missing("hf-hearts-canvas");
        return Ok(None);
    };
    let canvas: HtmlCanvasElement = el.dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let (w, h) = viewport(win);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);

    let seed = win.performance().map(|p| p.now()).unwrap_or(0.0) as u32 ^ 0x9e37_79b9;
    let field = Rc::new(RefCell::new(HeartField::new(HEART_COUNT, w, h, seed)));

    // Regenerate the pool whenever the viewport changes.
    {
        let field_resize = field.clone();
        let canvas_resize = canvas.clone();
        let win_resize = win.clone();
        let closure = Closure::wrap(Box::new(move || {
            let (w, h) = viewport(&win_resize);
            canvas_resize.set_width(w as u32);
            canvas_resize.set_height(h as u32);
            field_resize.borrow_mut().reset(w, h);
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let stopped = Rc::new(Cell::new(false));
    start_frame_loop(field, ctx, stopped.clone());
    Ok(Some(HeartsHandle { stopped }))
}

fn start_frame_loop(
    field: Rc<RefCell<HeartField>>,
    ctx: CanvasRenderingContext2d,
    stopped: Rc<Cell<bool>>,
) {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        if stopped.get() {
            return;
        }
        {
            // Draw at the current positions, then move; a recycled heart is
            // drawn at the bottom edge on its re-entry frame.
            let mut field = field.borrow_mut();
            draw(&ctx, &field);
            field.step();
        }
        if let Some(w) = window() {
            let _ = w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
