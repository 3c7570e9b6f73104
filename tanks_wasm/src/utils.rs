use std::{cell::RefCell, rc::Rc};

use tanks_core::config::GameConfig;
use wasm_bindgen::{convert::FromWasmAbi, prelude::*, JsCast};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

pub const SETTINGS_PATH: &str = "/api/settings";
const CANVAS_ID: &str = "tanks";

pub fn js_window() -> Window {
    web_sys::window().expect("no global `window` exists")
}

fn document() -> Document {
    js_window()
        .document()
        .expect("should have a document on window")
}

/// Milliseconds since the page started, the clock every game timer runs on
pub fn now_ms() -> f64 {
    js_window()
        .performance()
        .expect("window should expose `performance`")
        .now()
}

/// The canvas from index.html, or a fresh one appended to the body
pub fn fetch_or_create_canvas() -> HtmlCanvasElement {
    let document = document();
    let element = match document.get_element_by_id(CANVAS_ID) {
        Some(element) => element,
        None => {
            let element = document
                .create_element("canvas")
                .expect("document should create canvas");
            element.set_id(CANVAS_ID);
            document
                .body()
                .expect("document should have a body")
                .append_child(&element)
                .expect("added canvas to the DOM");
            element
        }
    };

    element
        .dyn_into::<HtmlCanvasElement>()
        .expect("element is canvas element")
}

/// Trait for the canvas the whole game is painted on
pub trait Canvas {
    /// Sizes the Element to the game window, UI strip included
    fn set_game_size(&self, config: &GameConfig);
    fn add_js_listener<E: FromWasmAbi + 'static>(&self, event: &str, func: Box<dyn FnMut(E)>);
    fn get_2d_context(&self) -> CanvasRenderingContext2d;
}

impl Canvas for HtmlCanvasElement {
    fn set_game_size(&self, config: &GameConfig) {
        self.set_width(config.window_width as u32);
        self.set_height(config.window_height as u32);
    }

    fn add_js_listener<E: FromWasmAbi + 'static>(&self, event: &str, func: Box<dyn FnMut(E)>) {
        let listener = Closure::wrap(func);

        self.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .expect("failed to add listener");

        listener.forget();
    }

    fn get_2d_context(&self) -> CanvasRenderingContext2d {
        self.get_context("2d")
            .expect("canvas has 2d context")
            .expect("valid context")
            .dyn_into::<CanvasRenderingContext2d>()
            .expect("root canvas")
    }
}

/// Listen on the window itself, for input that should work without canvas focus
pub fn add_window_listener<E: FromWasmAbi + 'static>(event: &str, func: Box<dyn FnMut(E)>) {
    let listener = Closure::wrap(func);

    js_window()
        .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
        .expect("failed to add listener");

    listener.forget();
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn schedule(frame: &FrameCallback) {
    if let Some(callback) = frame.borrow().as_ref() {
        js_window()
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .expect("should register `requestAnimationFrame` OK");
    }
}

/// Run `draw_call` once per display refresh for the life of the page
pub fn start_animation_loop(mut draw_call: Box<dyn FnMut()>) {
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        draw_call();
        schedule(&next_frame);
    }) as Box<dyn FnMut()>));

    schedule(&frame);
}
