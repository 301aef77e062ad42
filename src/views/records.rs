// ============================================================================
// RECORDS VIEW - Visit/diagnosis/medicine rows (all records or the patient's own)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::utils::format::display_date;
use crate::views::common::{data_table, empty_state, or_na, status_badge, strong_cell, text_cell};

pub fn render_records(state: &AppState) -> Result<Element, JsValue> {
    let records = state.data.records.borrow().clone();
    if records.is_empty() {
        return empty_state("📋", "No records found", "There are no medical records to display at this time.");
    }

    let mut rows = Vec::with_capacity(records.len());
    for record in &records {
        let patient = ElementBuilder::new("div")?
            .class("patient-cell")
            .child(strong_cell(or_na(&record.patient_name))?)?
            .child(
                ElementBuilder::new("span")?
                    .class("badge blood-group")
                    .text(record.blood_group.as_deref().unwrap_or(""))
                    .build(),
            )?
            .build();
        let doctor = ElementBuilder::new("div")?
            .class("doctor-cell")
            .child(strong_cell(or_na(&record.doctor_name))?)?
            .child(
                ElementBuilder::new("small")?
                    .text(record.specialty.as_deref().unwrap_or(""))
                    .build(),
            )?
            .build();
        let date = record.visit_date.as_deref().map(display_date).unwrap_or_default();
        rows.push(vec![
            patient,
            doctor,
            text_cell(&date)?,
            text_cell(or_na(&record.diagnosis_name))?,
            text_cell(or_na(&record.medicine_name))?,
            status_badge(record.is_dispensed())?,
        ]);
    }

    Ok(ElementBuilder::new("div")?
        .class("records-container")
        .child(data_table(
            &["Patient", "Doctor", "Visit Date", "Diagnosis", "Medicine", "Status"],
            rows,
        )?)?
        .build())
}
