// ============================================================================
// REGISTER VIEW - Patient self-registration
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::RegisterDraft;
use crate::state::{AppState, AuthScreen, FormState};
use crate::utils::constants::{BLOOD_GROUPS, GENDERS};
use crate::viewmodels::SessionViewModel;
use crate::views::common::{plain_options, render_notice, select_field, submit, submit_button, text_field, textarea_field};
use crate::views::login::auth_header;

/// Bind a text input to one field of the registration draft
fn bound(
    forms: &FormState,
    label: &str,
    input_type: &str,
    value: &str,
    required: bool,
    set: fn(&mut RegisterDraft, String),
) -> Result<Element, JsValue> {
    let forms = forms.clone();
    text_field(label, input_type, value, "", required, move |v| {
        set(&mut forms.register.borrow_mut(), v)
    })
}

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let draft = state.forms.register.borrow().clone();
    let forms = &state.forms;

    let gender = {
        let forms = forms.clone();
        select_field("Gender *", &plain_options(GENDERS), &draft.gender, None, move |v| {
            forms.register.borrow_mut().gender = v;
        })?
    };
    let blood_group = {
        let forms = forms.clone();
        select_field("Blood Group *", &plain_options(BLOOD_GROUPS), &draft.blood_group, None, move |v| {
            forms.register.borrow_mut().blood_group = v;
        })?
    };
    let address = {
        let forms = forms.clone();
        textarea_field("Address *", &draft.address, "Street, city", 2, move |v| {
            forms.register.borrow_mut().address = v;
        })?
    };

    let account = ElementBuilder::new("div")?
        .class("form-row")
        .child(bound(forms, "Username *", "text", &draft.username, true, |d, v| d.username = v)?)?
        .child(bound(forms, "Password *", "password", &draft.password, true, |d, v| d.password = v)?)?
        .build();
    let personal = ElementBuilder::new("div")?
        .class("form-row")
        .child(bound(forms, "Full Name *", "text", &draft.name, true, |d, v| d.name = v)?)?
        .child(bound(forms, "Email *", "email", &draft.email, true, |d, v| d.email = v)?)?
        .build();
    let details = ElementBuilder::new("div")?
        .class("form-row")
        .child(gender)?
        .child(bound(forms, "Date of Birth *", "date", &draft.dob, true, |d, v| d.dob = v)?)?
        .child(blood_group)?
        .build();
    let contact = ElementBuilder::new("div")?
        .class("form-row")
        .child(bound(forms, "Phone *", "tel", &draft.phone, true, |d, v| d.phone = v)?)?
        .child(bound(forms, "Emergency Contact Name", "text", &draft.emergency_contact_name, false, |d, v| {
            d.emergency_contact_name = v
        })?)?
        .child(bound(forms, "Emergency Contact", "tel", &draft.emergency_contact, false, |d, v| {
            d.emergency_contact = v
        })?)?
        .build();

    let state_submit = state.clone();
    let form = ElementBuilder::new("form")?
        .class("login-form register-form")
        .children(vec![account, personal, details, contact, address])?
        .child(submit_button("Register", "Registering...", state.is_loading())?)?
        .on_submit(move |_| {
            submit(&state_submit, |state| async move {
                let _ = SessionViewModel::new().register(&state).await;
            });
        })?
        .build();

    let state_back = state.clone();
    let switch = ElementBuilder::new("p")?
        .class("auth-switch")
        .text("Already have an account? ")
        .child(
            ElementBuilder::new("button")?
                .attr("type", "button")?
                .class("link-btn")
                .text("Login here")
                .on_click(move |_| {
                    state_back.set_notice(None);
                    state_back.set_auth_screen(AuthScreen::Login);
                    state_back.notify_subscribers();
                })?
                .build(),
        )?
        .build();

    let mut container = ElementBuilder::new("div")?
        .class("login-container")
        .child(auth_header("Create your patient account")?)?;
    if let Some(notice) = render_notice(state)? {
        container = container.child(notice)?;
    }
    container = container.child(form)?.child(switch)?;

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(container.build())?
        .build())
}
