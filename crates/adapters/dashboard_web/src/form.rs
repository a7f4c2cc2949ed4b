//! Collect the config form's fields into a [`ConfigFormSubmission`].

use js_sys::Array;
use ovenpanel_domain::config_form::ConfigFormSubmission;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, HtmlFormElement};


/// Read every named field of `form`, in document order.
///
/// File inputs carry no text value and are skipped.
pub fn collect(form: &HtmlFormElement) -> Result<ConfigFormSubmission, JsValue> {
    let data = FormData::new_with_form(form)?;
    let mut submission = ConfigFormSubmission::new();

    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(submission);
    };
    for entry in entries {
        let pair: Array = entry?.dyn_into()?;
        match (pair.get(0).as_string(), pair.get(1).as_string()) {
            (Some(name), Some(value)) => submission.push(name, value),
            (name, _) => log::debug!("skipping non-text form field {name:?}"),
        }
    }
    Ok(submission)
}
