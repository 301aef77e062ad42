// ============================================================================
// CLINICAL FORMS - Create visit, add diagnosis, add prescription (doctor)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::utils::constants::{SEVERITIES, VISIT_STATUSES};
use crate::viewmodels::ActionsViewModel;
use crate::views::common::{
    checkbox_field, plain_options, select_field, submit, submit_button, text_field, textarea_field,
};

fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

fn id_value(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

fn form_container(title: &str, form: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("form-container")
        .child(ElementBuilder::new("h3")?.text(title).build())?
        .child(form)?
        .build())
}

fn visit_options(state: &AppState) -> Vec<(String, String)> {
    state
        .data
        .visits
        .borrow()
        .iter()
        .map(|v| (v.visit_id.to_string(), v.option_label()))
        .collect()
}

pub fn render_create_visit(state: &AppState) -> Result<Element, JsValue> {
    let draft = state.forms.visit.borrow().clone();
    let forms = state.forms.clone();

    let patients: Vec<(String, String)> = state
        .data
        .patients
        .borrow()
        .iter()
        .map(|p| (p.patient_id.to_string(), p.option_label()))
        .collect();
    let doctors: Vec<(String, String)> = state
        .data
        .doctors
        .borrow()
        .iter()
        .map(|d| (d.doctor_id.to_string(), d.option_label()))
        .collect();

    let patient = {
        let forms = forms.clone();
        select_field("Patient *", &patients, &id_value(draft.patient_id), Some("Select Patient"), move |v| {
            forms.visit.borrow_mut().patient_id = parse_id(&v);
        })?
    };
    let doctor = {
        let forms = forms.clone();
        select_field("Doctor *", &doctors, &id_value(draft.doctor_id), Some("Select Doctor"), move |v| {
            forms.visit.borrow_mut().doctor_id = parse_id(&v);
        })?
    };
    let reason = {
        let forms = forms.clone();
        text_field("Reason for Visit *", "text", &draft.reason, "e.g. Fever and headache", true, move |v| {
            forms.visit.borrow_mut().reason = v;
        })?
    };
    let vitals = {
        let forms = forms.clone();
        textarea_field("Vital Signs", &draft.vital_signs, r#"{"bp": "120/80", "temp": "98.6"}"#, 2, move |v| {
            forms.visit.borrow_mut().vital_signs = v;
        })?
    };
    let notes = {
        let forms = forms.clone();
        textarea_field("Notes", &draft.notes, "Additional notes...", 3, move |v| {
            forms.visit.borrow_mut().notes = v;
        })?
    };
    let status = {
        let forms = forms.clone();
        select_field("Status", &plain_options(VISIT_STATUSES), &draft.status, None, move |v| {
            forms.visit.borrow_mut().status = v;
        })?
    };

    let state_submit = state.clone();
    let form = ElementBuilder::new("form")?
        .class("data-form")
        .child(ElementBuilder::new("div")?.class("form-row").child(patient)?.child(doctor)?.build())?
        .children(vec![reason, vitals, notes, status])?
        .child(submit_button("Create Visit", "Creating...", state.is_loading())?)?
        .on_submit(move |_| {
            submit(&state_submit, |state| async move {
                let _ = ActionsViewModel::new().create_visit(&state).await;
            });
        })?
        .build();

    form_container("📋 Visit Information", form)
}

pub fn render_add_diagnosis(state: &AppState) -> Result<Element, JsValue> {
    let draft = state.forms.diagnosis.borrow().clone();
    let forms = state.forms.clone();

    let visit = {
        let forms = forms.clone();
        select_field("Visit *", &visit_options(state), &id_value(draft.visit_id), Some("Select Visit"), move |v| {
            forms.diagnosis.borrow_mut().visit_id = parse_id(&v);
        })?
    };
    let name = {
        let forms = forms.clone();
        text_field("Diagnosis Name *", "text", &draft.name, "e.g. Type 2 Diabetes", true, move |v| {
            forms.diagnosis.borrow_mut().name = v;
        })?
    };
    let description = {
        let forms = forms.clone();
        textarea_field("Description", &draft.description, "Detailed description...", 3, move |v| {
            forms.diagnosis.borrow_mut().description = v;
        })?
    };
    let severity = {
        let forms = forms.clone();
        select_field("Severity", &plain_options(SEVERITIES), &draft.severity, None, move |v| {
            forms.diagnosis.borrow_mut().severity = v;
        })?
    };
    let chronic = {
        let forms = forms.clone();
        checkbox_field("Chronic condition", draft.is_chronic, move |checked| {
            forms.diagnosis.borrow_mut().is_chronic = checked;
        })?
    };

    let state_submit = state.clone();
    let form = ElementBuilder::new("form")?
        .class("data-form")
        .children(vec![visit, name, description, severity, chronic])?
        .child(submit_button("Add Diagnosis", "Saving...", state.is_loading())?)?
        .on_submit(move |_| {
            submit(&state_submit, |state| async move {
                let _ = ActionsViewModel::new().add_diagnosis(&state).await;
            });
        })?
        .build();

    form_container("🩺 Diagnosis", form)
}

pub fn render_add_prescription(state: &AppState) -> Result<Element, JsValue> {
    let draft = state.forms.prescription.borrow().clone();
    let forms = state.forms.clone();

    let visit = {
        let forms = forms.clone();
        select_field("Visit *", &visit_options(state), &id_value(draft.visit_id), Some("Select Visit"), move |v| {
            forms.prescription.borrow_mut().visit_id = parse_id(&v);
        })?
    };
    let medicine = {
        let forms = forms.clone();
        text_field("Medicine Name *", "text", &draft.medicine, "e.g. Paracetamol", true, move |v| {
            forms.prescription.borrow_mut().medicine = v;
        })?
    };
    let dosage = {
        let forms = forms.clone();
        text_field("Dosage *", "text", &draft.dosage, "e.g. 500mg", true, move |v| {
            forms.prescription.borrow_mut().dosage = v;
        })?
    };
    let frequency = {
        let forms = forms.clone();
        text_field("Frequency *", "text", &draft.frequency, "e.g. Twice daily", true, move |v| {
            forms.prescription.borrow_mut().frequency = v;
        })?
    };
    let duration = {
        let forms = forms.clone();
        text_field("Duration *", "text", &draft.duration, "e.g. 7 days", true, move |v| {
            forms.prescription.borrow_mut().duration = v;
        })?
    };
    let instructions = {
        let forms = forms.clone();
        textarea_field("Instructions", &draft.instructions, "Take after meals...", 2, move |v| {
            forms.prescription.borrow_mut().instructions = v;
        })?
    };

    let state_submit = state.clone();
    let form = ElementBuilder::new("form")?
        .class("data-form")
        .child(visit)?
        .child(ElementBuilder::new("div")?.class("form-row").child(medicine)?.child(dosage)?.build())?
        .child(ElementBuilder::new("div")?.class("form-row").child(frequency)?.child(duration)?.build())?
        .child(instructions)?
        .child(submit_button("Add Prescription", "Saving...", state.is_loading())?)?
        .on_submit(move |_| {
            submit(&state_submit, |state| async move {
                let _ = ActionsViewModel::new().add_prescription(&state).await;
            });
        })?
        .build();

    form_container("💊 Prescription", form)
}
