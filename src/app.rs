// ============================================================================
// APP - Owns the state and the #app root, re-renders on every change
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;
use crate::views::common::refresh_data;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        if SessionViewModel::new().restore(&state) {
            log::info!("💾 [APP] Session restored from storage");
        }

        // Batch the updates of one tick into a single render
        state.subscribe_to_changes(move || {
            Timeout::new(0, crate::rerender_app).forget();
        });

        if state.auth.is_logged_in() {
            refresh_data(&state);
        }

        Ok(Self { state, root })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        clear_children(&self.root);
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)
    }
}
