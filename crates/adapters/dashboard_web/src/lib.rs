//! # ovenpanel-dashboard-web
//!
//! Browser binding for the page served by the oven. The page provides three
//! elements; this crate wires them:
//!
//! | Element id | Behaviour |
//! |------------|-----------|
//! | `configForm` | submit → `POST /set_config` (urlencoded), marks `data-status` |
//! | `increment` | click → `GET /increment`, one request per click |
//! | `readout` | `GET /get_state` every second, text `"{cur}/{set} °F for {elapsed}/{total} seconds"` |
//!
//! Hosts that build their own page can call [`init_panel`] with element
//! handles directly instead of relying on the ids.

mod api;
mod bindings;
mod form;
mod report;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlFormElement};

pub use bindings::{DEFAULT_POLL_PERIOD_MS, PanelBindings, STALE_CLASS, init_panel};

const CONFIG_FORM_ID: &str = "configForm";
const INCREMENT_ID: &str = "increment";
const READOUT_ID: &str = "readout";

thread_local! {
    static PANEL: RefCell<Option<PanelBindings>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    if document.ready_state() == "loading" {
        let ready_document = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = mount(&ready_document) {
                log::warn!("failed to mount panel: {err:?}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        Ok(())
    } else {
        mount(&document)
    }
}

/// Detach the panel from the page and stop polling.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(bindings) = PANEL.with(|slot| slot.borrow_mut().take()) {
        bindings.teardown();
    }
}

/// Set the setpoint directly (`GET /set/{value}`).
#[wasm_bindgen(js_name = setSetpoint)]
pub async fn set_setpoint(value: i32) -> Result<(), JsValue> {
    api::set_setpoint(value).await.map_err(|err| {
        let message = report::describe(&err);
        log::warn!("setpoint update failed: {message}");
        JsValue::from_str(&message)
    })
}

fn mount(document: &Document) -> Result<(), JsValue> {
    let config_form: HtmlFormElement = element_by_id(document, CONFIG_FORM_ID)?;
    let increment: HtmlElement = element_by_id(document, INCREMENT_ID)?;
    let readout: HtmlElement = element_by_id(document, READOUT_ID)?;

    let bindings = init_panel(config_form, increment, readout, DEFAULT_POLL_PERIOD_MS)?;
    // Replacing an earlier mount drops its bindings, which stops its poller.
    PANEL.with(|slot| slot.replace(Some(bindings)));
    Ok(())
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has an unexpected type")))
}
