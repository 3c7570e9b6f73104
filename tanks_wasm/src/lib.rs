use std::{cell::RefCell, panic, rc::Rc};

use app::App;
use interface::{fetch_settings, setup_input_listeners};
use tanks_core::config::GameConfig;
use utils::*;
use wasm_bindgen::prelude::*;

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod app;
mod assets;
mod audio;
mod interface;
mod render;
mod utils;

thread_local! {
    /// Global State for the Game
    ///
    /// Do not panic while using this data, otherwise you may
    /// encounter a permanent locking of the Data
    pub static APP: RefCell<App> = RefCell::new(App::new());
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Initialization process for the window
///
/// sets up logging, input and the canvas, then starts the frame loop while
/// settings and media load in the background
#[wasm_bindgen(start)]
pub fn start() {
    setup_logging();

    let canvas_element = Rc::new(fetch_or_create_canvas());
    canvas_element.set_game_size(&GameConfig::default());
    setup_input_listeners(&canvas_element);

    fetch_settings(canvas_element.clone());

    let context = canvas_element.get_2d_context();
    let draw_procedure = move || APP.with(|app| app.borrow_mut().frame(&context, now_ms()));
    start_animation_loop(Box::new(draw_procedure));
}

fn setup_logging() {
    panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(::log::Level::Debug).expect("initializing logging");
}
