// ============================================================================
// PRESCRIPTIONS VIEW - Pharmacist list with pending filter and dispensing
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{confirm, ElementBuilder};
use crate::models::Prescription;
use crate::state::AppState;
use crate::utils::format::display_date;
use crate::viewmodels::ActionsViewModel;
use crate::views::common::{
    checkbox_field, data_table, empty_state, or_na, run, status_badge, strong_cell, submit, text_cell,
};

fn action_cell(state: &AppState, prescription: &Prescription) -> Result<Element, JsValue> {
    if !prescription.is_pending() {
        let when = prescription.dispensed_date.as_deref().map(display_date).unwrap_or_default();
        return text_cell(&when);
    }
    let id = prescription.prescription_id;
    let medicine = prescription.medicine_name.clone();
    let state_dispense = state.clone();
    Ok(ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("dispense-btn")
        .flag("disabled", state.is_loading())?
        .text("💊 Dispense")
        .on_click(move |_| {
            if !confirm(&format!("Dispense {}?", medicine)) {
                return;
            }
            submit(&state_dispense, move |state| async move {
                let _ = ActionsViewModel::new().dispense(&state, id).await;
            });
        })?
        .build())
}

pub fn render_prescriptions(state: &AppState) -> Result<Element, JsValue> {
    let state_filter = state.clone();
    let filter = checkbox_field("Show pending only", state.pending_only(), move |checked| {
        run(&state_filter, move |state| async move {
            ActionsViewModel::new().set_pending_only(&state, checked).await;
        });
    })?;
    let toolbar = ElementBuilder::new("div")?.class("table-filters").child(filter)?.build();

    let prescriptions = state.data.prescriptions.borrow().clone();
    let body = if prescriptions.is_empty() {
        empty_state("💊", "No prescriptions found", "There are no prescriptions to display.")?
    } else {
        let mut rows = Vec::with_capacity(prescriptions.len());
        for p in &prescriptions {
            let dosage = format!(
                "{} • {} • {}",
                or_na(&p.dosage),
                or_na(&p.frequency),
                or_na(&p.duration)
            );
            rows.push(vec![
                strong_cell(or_na(&p.patient_name))?,
                text_cell(&p.medicine_name)?,
                text_cell(&dosage)?,
                text_cell(or_na(&p.doctor_name))?,
                status_badge(p.is_dispensed)?,
                action_cell(state, p)?,
            ]);
        }
        data_table(&["Patient", "Medicine", "Dosage", "Doctor", "Status", "Action"], rows)?
    };

    Ok(ElementBuilder::new("div")?
        .class("prescriptions-container")
        .child(toolbar)?
        .child(body)?
        .build())
}
