#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use clock_of_clocks::{HourFormat, Layout, SystemClock, WallClock};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn canvas_takes_layout_size() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    let layout = Layout::new(1000.0).unwrap();
    canvas.set_width(layout.width() as u32);
    canvas.set_height(layout.height().ceil() as u32);
    document.body().unwrap().append_child(&canvas).unwrap();

    let rect = canvas.get_bounding_client_rect();
    assert_eq!(rect.width(), 1000.0);
    assert!(rect.height() > 0.0 && rect.height() < rect.width());
}

#[wasm_bindgen_test]
fn system_clock_reads_browser_time() {
    let time = SystemClock.sample(None, HourFormat::Twelve);
    assert!((1..=12).contains(&time.hour));
    assert!(time.minute < 60 && time.second < 60);
}
