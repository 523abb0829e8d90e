//! A wall of 20×8 analog clocks that wander idly and, a few seconds before
//! every minute, sweep their hands into a digital readout of the time.
//!
//! The engine in [`display`] is platform independent: it is driven with a
//! wall-clock instant once per frame and paints through the [`Renderer`]
//! trait. On `wasm32` the crate also exports a start function that draws on
//! a `<canvas>` element.

pub mod config;
pub mod display;
pub mod error;
pub mod glyph;
pub mod hand;
pub mod render;
pub mod time;
pub mod topology;

pub use config::{CanvasSizing, DisplayConfig, HourFormat};
pub use display::{ClockCell, ClockDisplay, DisplayMode, Tick};
pub use error::{ClockError, Result};
pub use render::{Layout, Point, Renderer, Stroke};
pub use time::{ClockTime, SimulatedClock, SystemClock, WallClock};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use wasm_bindgen::prelude::*;

    use crate::config::DisplayConfig;

    mod console;
    mod render;

    /// Id of the canvas element the display draws on.
    const CANVAS_ID: &str = "clock-of-clocks";

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console::init();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        let config = match canvas.get_attribute("data-config") {
            Some(json) => DisplayConfig::from_json(&json).map_err(to_js)?,
            None => DisplayConfig::default(),
        };

        render::start(canvas, config, StdRng::from_entropy())?;
        Ok(())
    }

    pub(crate) fn to_js(err: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
