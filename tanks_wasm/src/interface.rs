use std::rc::Rc;

use js_sys::JsString;
use tanks_core::utils::Vector2;
use tanks_events::{settings::ClientSettings, InputEvent};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Event, HtmlCanvasElement, KeyboardEvent, MouseEvent, Response};

use crate::{
    console_log,
    utils::{add_window_listener, js_window, now_ms, Canvas, SETTINGS_PATH},
    APP,
};

/// Keyboard goes to the whole window, clicks only count on the canvas
pub fn setup_input_listeners(canvas: &HtmlCanvasElement) {
    add_window_listener(
        "keydown",
        Box::new(move |event: KeyboardEvent| {
            let key = event.key();
            APP.with(|app| {
                let mut app = app.borrow_mut();
                // keep the page from scrolling on space and the arrow keys
                if app.is_bound(&key) {
                    event.prevent_default();
                }
                app.handle_input(InputEvent::KeyDown(key), now_ms());
            });
        }),
    );

    add_window_listener(
        "keyup",
        Box::new(move |event: KeyboardEvent| {
            APP.with(|app| {
                app.borrow_mut()
                    .handle_input(InputEvent::KeyUp(event.key()), now_ms())
            });
        }),
    );

    // keyup never arrives for keys released while the page is in the background
    add_window_listener(
        "blur",
        Box::new(move |_: Event| APP.with(|app| app.borrow_mut().release_keys())),
    );

    canvas.add_js_listener(
        "mousedown",
        Box::new(move |event: MouseEvent| {
            let position = Vector2::new(event.offset_x().into(), event.offset_y().into());
            APP.with(|app| {
                app.borrow_mut()
                    .handle_input(InputEvent::MouseDown(position), now_ms())
            });
        }),
    );
}

/// Ask the host for tuning and bindings, falling back to defaults on any failure
pub fn fetch_settings(canvas: Rc<HtmlCanvasElement>) {
    let apply = move |settings: ClientSettings| {
        canvas.set_game_size(&settings.game);
        APP.with(|app| app.borrow_mut().settings_loaded(settings));
    };
    let fallback = apply.clone();

    let on_text = Closure::once(move |text: JsValue| {
        let text = text
            .dyn_into::<JsString>()
            .map(String::from)
            .unwrap_or_default();

        let settings = serde_json::from_str::<ClientSettings>(&text)
            .map_err(|err| err.to_string())
            .and_then(|settings| settings.validated().map_err(|err| err.to_string()));

        match settings {
            Ok(settings) => apply(settings),
            Err(err) => {
                console_log!("bad settings from {}, using defaults: {}", SETTINGS_PATH, err);
                apply(ClientSettings::default());
            }
        }
    });

    let on_response = Closure::once(move |response: JsValue| {
        let text = response
            .dyn_into::<Response>()
            .ok()
            .filter(Response::ok)
            .and_then(|response| response.text().ok());

        match text {
            Some(text) => {
                // the promise keeps no reference to the closure, so it is leaked
                let _ = text.then(&on_text);
                on_text.forget();
            }
            None => {
                console_log!("no settings at {}, using defaults", SETTINGS_PATH);
                fallback(ClientSettings::default());
            }
        }
    });

    let on_error = Closure::once(move |err: JsValue| {
        console_log!("settings request failed, using defaults: {:?}", err);
        APP.with(|app| app.borrow_mut().settings_loaded(ClientSettings::default()));
    });

    let _ = js_window()
        .fetch_with_str(SETTINGS_PATH)
        .then(&on_response)
        .catch(&on_error);

    on_response.forget();
    on_error.forget();
}
