// ============================================================================
// COMMON VIEW PIECES - Form fields, tables, banners, background tasks
// ============================================================================

use std::future::Future;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlAnchorElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom::{event_target, field_checked, field_value, selected_file, ElementBuilder};
use crate::models::SelectedFile;
use crate::state::{AppState, NoticeKind};
use crate::viewmodels::DataViewModel;

const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Run `task` in the background, then re-render. The loading flag belongs
/// to `submit` and is left alone here.
pub fn run<F, Fut>(state: &AppState, task: F)
where
    F: FnOnce(AppState) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let state = state.clone();
    spawn_local(async move {
        task(state.clone()).await;
        schedule_notice_dismiss(&state);
        state.notify_subscribers();
    });
}

/// Submit handler body: show the busy state now, run `task`, re-render.
/// Ignored while another submission is in flight.
pub fn submit<F, Fut>(state: &AppState, task: F)
where
    F: FnOnce(AppState) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    if !state.try_begin_submit() {
        return;
    }
    state.notify_subscribers();
    run(state, move |state| async move {
        task(state.clone()).await;
        state.set_loading(false);
    });
}

/// Reload every collection of the signed-in role
pub fn refresh_data(state: &AppState) {
    run(state, |state| async move {
        DataViewModel::new().refresh(&state).await;
    });
}

/// Drop the current banner after a few seconds, unless it was replaced
pub fn schedule_notice_dismiss(state: &AppState) {
    let notice = match state.notice() {
        Some(notice) => notice,
        None => return,
    };
    let state = state.clone();
    Timeout::new(NOTICE_TIMEOUT_MS, move || {
        if state.notice().as_ref() == Some(&notice) {
            state.set_notice(None);
            state.notify_subscribers();
        }
    })
    .forget();
}

pub fn render_notice(state: &AppState) -> Result<Option<Element>, JsValue> {
    let notice = match state.notice() {
        Some(notice) => notice,
        None => return Ok(None),
    };
    let class = match notice.kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Error => "notice notice-error",
    };
    let state_close = state.clone();
    let close = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("notice-close")
        .text("×")
        .on_click(move |_| {
            state_close.set_notice(None);
            state_close.notify_subscribers();
        })?
        .build();
    let banner = ElementBuilder::new("div")?
        .class(class)
        .attr("role", "alert")?
        .child(ElementBuilder::new("span")?.text(&notice.text).build())?
        .child(close)?
        .build();
    Ok(Some(banner))
}

fn labelled(label: &str, field: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.text(label).build())?
        .child(field)?
        .build())
}

/// `<input>` whose value is written back through `on_value` on every keystroke
pub fn text_field<F>(
    label: &str,
    input_type: &str,
    value: &str,
    placeholder: &str,
    required: bool,
    on_value: F,
) -> Result<Element, JsValue>
where
    F: Fn(String) + 'static,
{
    let input = ElementBuilder::new("input")?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .flag("required", required)?
        .on_input(move |event| {
            if let Some(target) = event_target(&event) {
                on_value(field_value(&target));
            }
        })?
        .build();
    if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    }
    labelled(label, input)
}

pub fn textarea_field<F>(label: &str, value: &str, placeholder: &str, rows: u32, on_value: F) -> Result<Element, JsValue>
where
    F: Fn(String) + 'static,
{
    let area = ElementBuilder::new("textarea")?
        .attr("placeholder", placeholder)?
        .attr("rows", &rows.to_string())?
        .on_input(move |event| {
            if let Some(target) = event_target(&event) {
                on_value(field_value(&target));
            }
        })?
        .build();
    if let Some(area) = area.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
    labelled(label, area)
}

/// `<select>` over `(value, label)` pairs. With a `placeholder`, an empty
/// first option is added and selected when `selected` is empty.
pub fn select_field<F>(
    label: &str,
    options: &[(String, String)],
    selected: &str,
    placeholder: Option<&str>,
    on_value: F,
) -> Result<Element, JsValue>
where
    F: Fn(String) + 'static,
{
    let mut builder = ElementBuilder::new("select")?;
    if let Some(placeholder) = placeholder {
        builder = builder
            .child(ElementBuilder::new("option")?.attr("value", "")?.text(placeholder).build())?
            .flag("required", true)?;
    }
    for (value, text) in options {
        builder = builder.child(ElementBuilder::new("option")?.attr("value", value)?.text(text).build())?;
    }
    let select = builder
        .on_change(move |event| {
            if let Some(target) = event_target(&event) {
                on_value(field_value(&target));
            }
        })?
        .build();
    if let Some(select) = select.dyn_ref::<HtmlSelectElement>() {
        select.set_value(selected);
    }
    labelled(label, select)
}

/// Options where value and label are the same text
pub fn plain_options(values: &[&str]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.to_string(), v.to_string())).collect()
}

pub fn checkbox_field<F>(label: &str, checked: bool, on_checked: F) -> Result<Element, JsValue>
where
    F: Fn(bool) + 'static,
{
    let input = ElementBuilder::new("input")?
        .attr("type", "checkbox")?
        .on_change(move |event| {
            if let Some(target) = event_target(&event) {
                on_checked(field_checked(&target));
            }
        })?
        .build();
    if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
        input.set_checked(checked);
    }
    Ok(ElementBuilder::new("label")?
        .class("filter-checkbox")
        .child(input)?
        .child(ElementBuilder::new("span")?.text(label).build())?
        .build())
}

/// File picker. `current` is shown under the input since a file input
/// cannot be pre-filled after a re-render.
pub fn file_field<F>(label: &str, accept: &str, current: Option<&SelectedFile>, on_file: F) -> Result<Element, JsValue>
where
    F: Fn(Option<SelectedFile>) + 'static,
{
    let input = ElementBuilder::new("input")?
        .attr("type", "file")?
        .attr("accept", accept)?
        .on_change(move |event| {
            let file = event_target(&event)
                .and_then(|target| selected_file(&target))
                .map(SelectedFile::from_browser);
            on_file(file);
        })?
        .build();
    let wrapper = ElementBuilder::new("div")?.class("file-input-wrapper").child(input)?;
    let wrapper = match current {
        Some(file) => wrapper.child(
            ElementBuilder::new("p")?
                .class("file-selected")
                .text(&format!("Selected: {}", file.name))
                .build(),
        )?,
        None => wrapper,
    };
    labelled(label, wrapper.build())
}

pub fn submit_button(label: &str, busy_label: &str, loading: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("submit-btn")
        .flag("disabled", loading)?
        .text(if loading { busy_label } else { label })
        .build())
}

pub fn empty_state(icon: &str, title: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("empty-state")
        .child(ElementBuilder::new("div")?.class("empty-icon").text(icon).build())?
        .child(ElementBuilder::new("h3")?.text(title).build())?
        .child(ElementBuilder::new("p")?.text(text).build())?
        .build())
}

/// Table from prebuilt cells
pub fn data_table(headers: &[&str], rows: Vec<Vec<Element>>) -> Result<Element, JsValue> {
    let mut head_row = ElementBuilder::new("tr")?;
    for header in headers {
        head_row = head_row.child(ElementBuilder::new("th")?.text(header).build())?;
    }
    let mut body = ElementBuilder::new("tbody")?;
    for cells in rows {
        let mut row = ElementBuilder::new("tr")?;
        for cell in cells {
            row = row.child(ElementBuilder::new("td")?.child(cell)?.build())?;
        }
        body = body.child(row.build())?;
    }
    let table = ElementBuilder::new("table")?
        .class("data-table")
        .child(ElementBuilder::new("thead")?.child(head_row.build())?.build())?
        .child(body.build())?
        .build();
    Ok(ElementBuilder::new("div")?.class("table-container").child(table)?.build())
}

pub fn text_cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("span")?.text(text).build())
}

pub fn strong_cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("strong")?.text(text).build())
}

pub fn or_na(value: &Option<String>) -> &str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or("N/A")
}

pub fn status_badge(dispensed: bool) -> Result<Element, JsValue> {
    let (class, text) = if dispensed {
        ("status-badge dispensed", "✅ Dispensed")
    } else {
        ("status-badge pending", "🕒 Pending")
    };
    Ok(ElementBuilder::new("span")?.class(class).text(text).build())
}

/// Hand `bytes` to the browser as a download named `file_name`
pub fn save_bytes(file_name: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = ElementBuilder::new("a")?.build().dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}
