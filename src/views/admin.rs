// ============================================================================
// ADMIN VIEWS - Patient directory and bulk import
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::ImportResult;
use crate::state::AppState;
use crate::utils::constants::IMPORT_COLUMNS;
use crate::utils::format::{display_date, import_template_csv};
use crate::viewmodels::ActionsViewModel;
use crate::views::common::{data_table, empty_state, file_field, or_na, save_bytes, strong_cell, submit, submit_button, text_cell};

const IMPORT_ACCEPT: &str = ".xlsx,.xls,.csv";
const TEMPLATE_FILE_NAME: &str = "patient_template.csv";

pub fn render_patients(state: &AppState) -> Result<Element, JsValue> {
    let patients = state.data.patients.borrow().clone();
    if patients.is_empty() {
        return empty_state("👥", "No patients found", "Registered and imported patients appear here.");
    }

    let mut rows = Vec::with_capacity(patients.len());
    for patient in &patients {
        let dob = patient.date_of_birth.as_deref().map(display_date).unwrap_or_default();
        rows.push(vec![
            text_cell(&patient.patient_id.to_string())?,
            strong_cell(&patient.name)?,
            text_cell(or_na(&patient.email))?,
            text_cell(or_na(&patient.gender))?,
            text_cell(&dob)?,
            text_cell(or_na(&patient.phone))?,
            text_cell(or_na(&patient.blood_group))?,
        ]);
    }
    data_table(&["ID", "Name", "Email", "Gender", "Date of Birth", "Phone", "Blood Group"], rows)
}

fn import_result_panel(result: &ImportResult) -> Result<Element, JsValue> {
    let count = |label: &str, value: u64, class: &str| -> Result<Element, JsValue> {
        Ok(ElementBuilder::new("div")?
            .class(&format!("result-stat {}", class))
            .child(ElementBuilder::new("strong")?.text(&value.to_string()).build())?
            .child(ElementBuilder::new("span")?.text(label).build())?
            .build())
    };

    let mut panel = ElementBuilder::new("div")?
        .class("import-result")
        .child(
            ElementBuilder::new("h4")?
                .text(result.message.as_deref().unwrap_or("Import completed"))
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("result-stats")
                .child(count("Successful", result.successful, "success")?)?
                .child(count("Failed", result.failed, "failed")?)?
                .child(count("Total", result.total, "total")?)?
                .build(),
        )?;

    if !result.errors.is_empty() {
        let mut list = ElementBuilder::new("ul")?.class("import-errors");
        for error in &result.errors {
            list = list.child(ElementBuilder::new("li")?.text(error).build())?;
        }
        panel = panel
            .child(ElementBuilder::new("h5")?.text("Errors").build())?
            .child(list.build())?;
    }
    Ok(panel.build())
}

pub fn render_import(state: &AppState) -> Result<Element, JsValue> {
    let draft = state.forms.import.borrow().clone();

    let mut columns = ElementBuilder::new("ul")?.class("column-list");
    for column in IMPORT_COLUMNS {
        columns = columns.child(ElementBuilder::new("li")?.text(column).build())?;
    }
    let template = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("template-btn")
        .text("📥 Download Template")
        .on_click(|_| {
            if let Err(e) = save_bytes(TEMPLATE_FILE_NAME, import_template_csv().as_bytes()) {
                log::error!("❌ [IMPORT] Template download failed: {:?}", e);
            }
        })?
        .build();
    let instructions = ElementBuilder::new("div")?
        .class("import-instructions")
        .child(ElementBuilder::new("h4")?.text("Required columns").build())?
        .child(columns.build())?
        .child(template)?
        .build();

    let forms = state.forms.clone();
    let picker = file_field("Spreadsheet *", IMPORT_ACCEPT, draft.file.as_ref(), move |file| {
        forms.import.borrow_mut().file = file;
    })?;

    let state_submit = state.clone();
    let form = ElementBuilder::new("form")?
        .class("data-form")
        .child(picker)?
        .child(
            ElementBuilder::new("p")?
                .class("form-hint")
                .text("Excel (.xlsx, .xls) or CSV files")
                .build(),
        )?
        .child(submit_button("Import Patients", "Importing...", state.is_loading())?)?
        .on_submit(move |_| {
            submit(&state_submit, |state| async move {
                let _ = ActionsViewModel::new().import_patients(&state).await;
            });
        })?
        .build();

    let mut container = ElementBuilder::new("div")?
        .class("form-container")
        .child(ElementBuilder::new("h3")?.text("📤 Import Patients").build())?
        .child(instructions)?
        .child(form)?;
    if let Some(result) = state.data.import_result.borrow().as_ref() {
        container = container.child(import_result_panel(result)?)?;
    }
    Ok(container.build())
}
