// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::ElementBuilder;
use crate::state::{AppState, AuthScreen};
use crate::utils::constants::DEMO_CREDENTIALS;
use crate::viewmodels::SessionViewModel;
use crate::views::common::{refresh_data, render_notice, submit, submit_button, text_field};

pub fn auth_header(subtitle: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("login-header")
        .child(ElementBuilder::new("div")?.class("logo-icon").text("❤️").build())?
        .child(ElementBuilder::new("h1")?.text("MediCare").build())?
        .child(ElementBuilder::new("p")?.text(subtitle).build())?
        .build())
}

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login()");
    let draft = state.forms.login.borrow().clone();
    let loading = state.is_loading();

    let username = {
        let forms = state.forms.clone();
        text_field("Username", "text", &draft.username, "Enter your username", true, move |value| {
            forms.login.borrow_mut().username = value;
        })?
    };
    let password = {
        let forms = state.forms.clone();
        text_field("Password", "password", &draft.password, "Enter your password", true, move |value| {
            forms.login.borrow_mut().password = value;
        })?
    };

    let state_submit = state.clone();
    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(username)?
        .child(password)?
        .child(submit_button("Sign In", "Signing in...", loading)?)?
        .on_submit(move |_| {
            submit(&state_submit, |state| async move {
                if SessionViewModel::new().login(&state).await.is_ok() {
                    refresh_data(&state);
                }
            });
        })?
        .build();

    let state_register = state.clone();
    let switch = ElementBuilder::new("p")?
        .class("auth-switch")
        .text("Don't have an account? ")
        .child(
            ElementBuilder::new("button")?
                .attr("type", "button")?
                .class("link-btn")
                .text("Register here")
                .on_click(move |_| {
                    state_register.set_notice(None);
                    state_register.set_auth_screen(AuthScreen::Register);
                    state_register.notify_subscribers();
                })?
                .build(),
        )?
        .build();

    let mut container = ElementBuilder::new("div")?
        .class("login-container")
        .child(auth_header("Hospital Management System")?)?;
    if let Some(notice) = render_notice(state)? {
        container = container.child(notice)?;
    }
    container = container.child(form)?.child(switch)?;
    if CONFIG.show_demo_credentials {
        container = container.child(render_demo_credentials()?)?;
    }

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(container.build())?
        .build())
}

fn render_demo_credentials() -> Result<Element, JsValue> {
    let mut list = ElementBuilder::new("div")?.class("demo-credentials");
    list = list.child(ElementBuilder::new("h4")?.text("Demo Credentials").build())?;
    for (icon, role, credentials) in DEMO_CREDENTIALS {
        list = list.child(
            ElementBuilder::new("p")?
                .text(&format!("{} {}: {}", icon, role, credentials))
                .build(),
        )?;
    }
    Ok(list.build())
}
