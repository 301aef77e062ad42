// ============================================================================
// DASHBOARD VIEW - Stats cards and per-role quick actions
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::{Identity, Role};
use crate::state::{AppState, View};
use crate::views::layout::go_to;

fn stat_card(class: &str, icon: &str, value: u64, label: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class(&format!("stat-card {}", class))
        .child(ElementBuilder::new("div")?.class("stat-icon").text(icon).build())?
        .child(
            ElementBuilder::new("div")?
                .class("stat-details")
                .child(ElementBuilder::new("h3")?.text(&value.to_string()).build())?
                .child(ElementBuilder::new("p")?.text(label).build())?
                .build(),
        )?
        .build())
}

fn quick_actions(role: Role) -> &'static [(View, &'static str)] {
    match role {
        Role::Doctor => &[(View::CreateVisit, "Create Visit"), (View::Records, "View Records")],
        Role::Patient => &[(View::MyRecords, "View My Records"), (View::UploadFile, "Upload File")],
        Role::Pharmacist => &[(View::Prescriptions, "View Prescriptions")],
        Role::Admin => &[(View::Patients, "Manage Patients"), (View::Import, "Import Patients")],
        Role::Unknown => &[],
    }
}

pub fn render_dashboard(state: &AppState, identity: &Identity) -> Result<Element, JsValue> {
    let stats = state.data.stats.borrow().clone();

    let mut actions = ElementBuilder::new("div")?.class("quick-actions");
    for (index, (view, label)) in quick_actions(identity.role).iter().enumerate() {
        let view = *view;
        let state_nav = state.clone();
        actions = actions.child(
            ElementBuilder::new("button")?
                .attr("type", "button")?
                .class(if index == 0 { "action-btn" } else { "action-btn secondary" })
                .text(label)
                .on_click(move |_| go_to(&state_nav, view))?
                .build(),
        )?;
    }

    let mut welcome = ElementBuilder::new("div")?
        .class("welcome-card")
        .child(ElementBuilder::new("h2")?.text("Welcome to MediCare 🏥").build())?
        .child(
            ElementBuilder::new("p")?
                .text("Your hospital management workspace.")
                .build(),
        )?;
    if identity.role == Role::Patient {
        let records = state.data.records.borrow().len() as u64;
        let files = state.data.files.borrow().len() as u64;
        welcome = welcome.child(
            ElementBuilder::new("div")?
                .class("patient-quick-info")
                .child(stat_card("info-item", "📋", records, "Medical Records")?)?
                .child(stat_card("info-item", "📁", files, "Uploaded Files")?)?
                .build(),
        )?;
    }
    welcome = welcome.child(actions.build())?;

    Ok(ElementBuilder::new("div")?
        .class("dashboard-grid")
        .child(stat_card("stat-primary", "👥", stats.total_patients, "Total Patients")?)?
        .child(stat_card("stat-success", "🩺", stats.total_doctors, "Total Doctors")?)?
        .child(stat_card("stat-warning", "📅", stats.today_visits, "Today's Visits")?)?
        .child(stat_card("stat-danger", "💊", stats.pending_prescriptions, "Pending Prescriptions")?)?
        .child(stat_card("stat-info", "🧪", stats.pending_tests, "Pending Tests")?)?
        .child(welcome.build())?
        .build())
}
