// ============================================================================
// FILES VIEW - Patient's stored files and the upload form
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::ElementBuilder;
use crate::models::MedicalFile;
use crate::state::AppState;
use crate::utils::constants::FILE_TYPES;
use crate::utils::format::{display_date, file_size_mb};
use crate::viewmodels::ActionsViewModel;
use crate::views::common::{
    empty_state, file_field, or_na, run, save_bytes, select_field, submit, submit_button, text_field,
    textarea_field,
};

const UPLOAD_ACCEPT: &str = ".jpg,.jpeg,.png,.pdf,.dcm";

fn file_icon(file_type: Option<&str>) -> &'static str {
    match file_type {
        Some("X-Ray") | Some("MRI") | Some("CT Scan") => "🩻",
        Some("Blood Test") => "🧪",
        Some("Prescription") => "💊",
        _ => "📄",
    }
}

fn download(state: &AppState, file: MedicalFile) {
    run(state, move |state| async move {
        if let Ok(bytes) = ActionsViewModel::new().download_file(&state, &file).await {
            if let Err(e) = save_bytes(&file.file_name, &bytes) {
                log::error!("❌ [FILES] Could not save {}: {:?}", file.file_name, e);
            }
        }
    });
}

fn file_card(state: &AppState, file: &MedicalFile) -> Result<Element, JsValue> {
    let uploaded = file.uploaded_at.as_deref().map(display_date).unwrap_or_default();
    let meta = format!("{} • {} • {}", or_na(&file.file_type), file_size_mb(file.file_size), uploaded);

    let mut info = ElementBuilder::new("div")?
        .class("file-info")
        .child(ElementBuilder::new("h4")?.text(&file.file_name).build())?
        .child(ElementBuilder::new("p")?.class("file-meta").text(&meta).build())?;
    if let Some(description) = file.description.as_deref().filter(|d| !d.is_empty()) {
        info = info.child(ElementBuilder::new("p")?.class("file-description").text(description).build())?;
    }

    let state_download = state.clone();
    let target = file.clone();
    Ok(ElementBuilder::new("div")?
        .class("file-card")
        .child(
            ElementBuilder::new("div")?
                .class("file-icon")
                .text(file_icon(file.file_type.as_deref()))
                .build(),
        )?
        .child(info.build())?
        .child(
            ElementBuilder::new("button")?
                .attr("type", "button")?
                .class("download-btn")
                .text("⬇️ Download")
                .on_click(move |_| download(&state_download, target.clone()))?
                .build(),
        )?
        .build())
}

pub fn render_my_files(state: &AppState) -> Result<Element, JsValue> {
    let files = state.data.files.borrow().clone();
    if files.is_empty() {
        return empty_state("📁", "No files uploaded", "Upload your medical reports, scans and test results.");
    }

    let mut grid = ElementBuilder::new("div")?.class("files-grid");
    for file in &files {
        grid = grid.child(file_card(state, file)?)?;
    }
    Ok(grid.build())
}

pub fn render_upload_file(state: &AppState) -> Result<Element, JsValue> {
    let draft = state.forms.upload.borrow().clone();
    let forms = state.forms.clone();
    let file_types: Vec<(String, String)> = FILE_TYPES
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    let file_type = {
        let forms = forms.clone();
        select_field("File Type *", &file_types, &draft.file_type, None, move |v| {
            forms.upload.borrow_mut().file_type = v;
        })?
    };
    let picker = {
        let forms = forms.clone();
        file_field("File *", UPLOAD_ACCEPT, draft.file.as_ref(), move |file| {
            forms.upload.borrow_mut().file = file;
        })?
    };
    let description = {
        let forms = forms.clone();
        textarea_field("Description", &draft.description, "Brief description of the file...", 3, move |v| {
            forms.upload.borrow_mut().description = v;
        })?
    };
    let visit = {
        let forms = forms.clone();
        text_field("Related Visit ID (optional)", "number", &draft.visit_id, "e.g. 12", false, move |v| {
            forms.upload.borrow_mut().visit_id = v;
        })?
    };
    let hint = ElementBuilder::new("p")?
        .class("form-hint")
        .text(&format!(
            "Supported formats: JPG, PNG, PDF, DICOM (Max {} MB)",
            CONFIG.max_upload_bytes() / 1024 / 1024
        ))
        .build();

    let state_submit = state.clone();
    let form = ElementBuilder::new("form")?
        .class("data-form")
        .children(vec![file_type, picker, hint, description, visit])?
        .child(submit_button("Upload File", "Uploading...", state.is_loading())?)?
        .on_submit(move |_| {
            submit(&state_submit, |state| async move {
                let _ = ActionsViewModel::new().upload_file(&state).await;
            });
        })?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("form-container")
        .child(ElementBuilder::new("h3")?.text("📤 Upload Medical File").build())?
        .child(form)?
        .build())
}
