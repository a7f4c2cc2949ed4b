//! Event wiring for the three panel controls.
//!
//! [`init_panel`] attaches the form and button listeners and starts the
//! status interval. Everything it creates is owned by the returned
//! [`PanelBindings`]; dropping it detaches the listeners and clears the timer.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlElement, HtmlFormElement};

use crate::{api, form, report};

/// Default period between two `/get_state` requests.
pub const DEFAULT_POLL_PERIOD_MS: u32 = 1000;

/// Class set on the readout while its text is stale.
pub const STALE_CLASS: &str = "stale";

/// Guard owning the panel's listeners and poll timer.
pub struct PanelBindings {
    form: HtmlFormElement,
    increment: HtmlElement,
    on_submit: Closure<dyn FnMut(Event)>,
    on_click: Closure<dyn FnMut(Event)>,
    poll: Option<Interval>,
    alive: Rc<Cell<bool>>,
}

impl PanelBindings {
    /// Detach the listeners and stop polling.
    pub fn teardown(self) {
        drop(self);
    }
}

impl Drop for PanelBindings {
    fn drop(&mut self) {
        // Requests already in flight cannot be aborted; they check this flag
        // before touching the DOM.
        self.alive.set(false);
        drop(self.poll.take());
        report::dom_failure(
            "detach submit listener",
            self.form
                .remove_event_listener_with_callback("submit", self.on_submit.as_ref().unchecked_ref()),
        );
        report::dom_failure(
            "detach click listener",
            self.increment
                .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref()),
        );
        log::debug!("panel bindings torn down");
    }
}

/// Wire the config form, the increment control and the readout.
///
/// # Errors
///
/// Returns the `JsValue` thrown by the DOM when a listener cannot be attached.
pub fn init_panel(
    config_form: HtmlFormElement,
    increment: HtmlElement,
    readout: HtmlElement,
    poll_period_ms: u32,
) -> Result<PanelBindings, JsValue> {
    let alive = Rc::new(Cell::new(true));

    let on_submit = submit_handler(config_form.clone(), Rc::clone(&alive));
    config_form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;

    let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        spawn_local(async {
            if let Err(err) = api::increment().await {
                log::warn!("increment failed: {}", report::describe(&err));
            }
        });
    });
    increment.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

    let poll = start_polling(readout, Rc::clone(&alive), poll_period_ms);

    Ok(PanelBindings {
        form: config_form,
        increment,
        on_submit,
        on_click,
        poll: Some(poll),
        alive,
    })
}

fn submit_handler(config_form: HtmlFormElement, alive: Rc<Cell<bool>>) -> Closure<dyn FnMut(Event)> {
    Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();

        let submission = match form::collect(&config_form) {
            Ok(submission) => submission,
            Err(err) => {
                log::warn!("failed to read config form: {err:?}");
                return;
            }
        };

        let config_form = config_form.clone();
        let alive = Rc::clone(&alive);
        spawn_local(async move {
            let status = match api::set_config(&submission).await {
                Ok(()) => {
                    log::debug!("config accepted by device");
                    "ok"
                }
                Err(err) => {
                    log::warn!("config submission failed: {}", report::describe(&err));
                    "error"
                }
            };
            if alive.get() {
                report::dom_failure("set form status", config_form.set_attribute("data-status", status));
            }
        });
    })
}

fn start_polling(readout: HtmlElement, alive: Rc<Cell<bool>>, period_ms: u32) -> Interval {
    Interval::new(period_ms, move || {
        let readout = readout.clone();
        let alive = Rc::clone(&alive);
        spawn_local(async move {
            let result = api::get_state().await;
            if !alive.get() {
                return;
            }
            match result {
                Ok(status) => {
                    readout.set_text_content(Some(&status.to_string()));
                    report::dom_failure("clear stale class", readout.class_list().remove_1(STALE_CLASS));
                }
                Err(err) => {
                    log::warn!("status poll failed: {}", report::describe(&err));
                    report::dom_failure("set stale class", readout.class_list().add_1(STALE_CLASS));
                }
            }
        });
    })
}
