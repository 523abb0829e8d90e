use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::Rng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::to_js;
use crate::config::{CanvasSizing, DisplayConfig};
use crate::display::ClockDisplay;
use crate::render::{Layout, Point, Renderer, Stroke};
use crate::time::{SystemClock, WallClock};

/// Room left for a vertical scrollbar when sizing from the page.
const SCROLLBAR_ALLOWANCE: f64 = 15.0;

/// Animation frames arriving this close to the frame interval still count.
const FRAME_SLACK_MS: f64 = 2.0;

/// Draws on a canvas 2D context.
struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

fn css_gray(value: u8) -> String {
    format!("rgb({value}, {value}, {value})")
}

impl CanvasRenderer {
    fn apply(&self, stroke: Stroke) {
        self.ctx.set_stroke_style_str(&css_gray(stroke.gray));
        self.ctx.set_line_width(stroke.weight);
    }
}

impl Renderer for CanvasRenderer {
    fn background(&mut self, gray: u8) {
        self.ctx.set_fill_style_str(&css_gray(gray));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn rect(&mut self, origin: Point, width: f64, height: f64, stroke: Stroke) {
        self.apply(stroke);
        self.ctx.stroke_rect(origin.x, origin.y, width, height);
    }

    fn circle(&mut self, center: Point, diameter: f64, stroke: Stroke) {
        self.apply(stroke);
        self.ctx.begin_path();
        if self.ctx.arc(center.x, center.y, diameter / 2.0, 0.0, TAU).is_ok() {
            self.ctx.stroke();
        }
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.apply(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }
}

/// Canvas width for the configured sizing, measured once.
fn canvas_width(window: &Window, sizing: &CanvasSizing) -> Result<f64, JsValue> {
    match sizing {
        CanvasSizing::Fixed { width } => Ok(*width),
        CanvasSizing::Viewport => {
            let width = window
                .inner_width()?
                .as_f64()
                .ok_or("viewport width unavailable")?;
            Ok(width - SCROLLBAR_ALLOWANCE)
        }
        CanvasSizing::Container { element_id } => {
            let element = window
                .document()
                .ok_or("no document")?
                .get_element_by_id(element_id)
                .ok_or_else(|| JsValue::from_str(&format!("container `{element_id}` not found")))?;
            Ok(f64::from(element.client_width()) - SCROLLBAR_ALLOWANCE)
        }
    }
}

/// Sizes the canvas and starts the frame loop.
pub fn start<G>(canvas: HtmlCanvasElement, config: DisplayConfig, rng: G) -> Result<(), JsValue>
where
    G: Rng + 'static,
{
    let window = web_sys::window().ok_or("no window")?;
    let layout = Layout::new(canvas_width(&window, &config.canvas)?).map_err(to_js)?;
    canvas.set_width(layout.width() as u32);
    canvas.set_height(layout.height().ceil() as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2D canvas not supported")?
        .dyn_into()?;
    ctx.set_line_cap("round");
    let mut renderer = CanvasRenderer {
        ctx,
        width: layout.width(),
        height: layout.height(),
    };

    let frame_interval = 1000.0 / f64::from(config.frame_rate);
    let mut display = ClockDisplay::new(config, rng).map_err(to_js)?;
    log::info!(
        "clock wall {:.0}x{:.0} px at {:.1} ms per frame",
        layout.width(),
        layout.height(),
        frame_interval
    );

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_window = window.clone();
    let mut last_frame = f64::NEG_INFINITY;
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if timestamp - last_frame + FRAME_SLACK_MS >= frame_interval {
            last_frame = timestamp;
            if let Err(err) = display.tick(SystemClock.now(), &layout, &mut renderer) {
                log::error!("clock wall stopped: {err}");
                return;
            }
        }

        // schedule next
        if let Some(callback) = f.borrow().as_ref() {
            if let Err(err) = frame_window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = g.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }

    Ok(())
}
