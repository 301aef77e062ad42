// ============================================================================
// APP VIEW - Auth screens or the role dashboard around the active page
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::Identity;
use crate::state::{AppState, AuthScreen, View};
use crate::views::admin::{render_import, render_patients};
use crate::views::clinical_forms::{render_add_diagnosis, render_add_prescription, render_create_visit};
use crate::views::common::render_notice;
use crate::views::dashboard::render_dashboard;
use crate::views::files::{render_my_files, render_upload_file};
use crate::views::layout::{render_content_header, render_sidebar};
use crate::views::login::render_login;
use crate::views::prescriptions::render_prescriptions;
use crate::views::records::render_records;
use crate::views::register::render_register;

fn render_page(state: &AppState, view: View, identity: &Identity) -> Result<Element, JsValue> {
    match view {
        View::Dashboard => render_dashboard(state, identity),
        View::Records | View::MyRecords => render_records(state),
        View::CreateVisit => render_create_visit(state),
        View::AddDiagnosis => render_add_diagnosis(state),
        View::AddPrescription => render_add_prescription(state),
        View::MyFiles => render_my_files(state),
        View::UploadFile => render_upload_file(state),
        View::Prescriptions => render_prescriptions(state),
        View::Patients => render_patients(state),
        View::Import => render_import(state),
    }
}

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let identity = match state.auth.get_identity() {
        Some(identity) => identity,
        None => {
            return match state.auth_screen() {
                AuthScreen::Login => render_login(state),
                AuthScreen::Register => render_register(state),
            }
        }
    };

    let view = state.active_view();
    let mut content = ElementBuilder::new("main")?
        .class("main-content")
        .child(render_content_header(view, &identity)?)?;
    if let Some(notice) = render_notice(state)? {
        content = content.child(notice)?;
    }
    if state.is_loading() {
        content = content.child(ElementBuilder::new("div")?.class("loading-bar").build())?;
    }
    content = content.child(
        ElementBuilder::new("section")?
            .class("content-body")
            .attr("data-view", view.id())?
            .child(render_page(state, view, &identity)?)?
            .build(),
    )?;

    Ok(ElementBuilder::new("div")?
        .class("dashboard-screen")
        .child(render_sidebar(state, &identity)?)?
        .child(content.build())?
        .build())
}
