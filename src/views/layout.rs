// ============================================================================
// LAYOUT - Sidebar navigation and page header around the active view
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::Identity;
use crate::state::{nav_items, AppState, View};
use crate::viewmodels::{DataViewModel, SessionViewModel};
use crate::views::common::run;

/// Open `view` if the role allows it, then reload data and re-render
pub fn go_to(state: &AppState, view: View) {
    run(state, move |state| async move {
        DataViewModel::new().open(&state, view).await;
    });
}

pub fn render_sidebar(state: &AppState, identity: &Identity) -> Result<Element, JsValue> {
    let active = state.active_view();

    let mut nav = ElementBuilder::new("nav")?.class("sidebar-nav");
    for view in nav_items(identity.role) {
        let view = *view;
        let state_nav = state.clone();
        let button = ElementBuilder::new("button")?
            .attr("type", "button")?
            .attr("data-view", view.id())?
            .class(if view == active { "active" } else { "" })
            .text(&format!("{} {}", view.icon(), view.title()))
            .on_click(move |_| go_to(&state_nav, view))?
            .build();
        nav = nav.child(button)?;
    }

    let header = ElementBuilder::new("div")?
        .class("sidebar-header")
        .child(ElementBuilder::new("h2")?.text("❤️ MediCare").build())?
        .child(
            ElementBuilder::new("p")?
                .class("sidebar-subtitle")
                .text(identity.role.as_str())
                .build(),
        )?
        .build();

    let state_logout = state.clone();
    let footer = ElementBuilder::new("div")?
        .class("sidebar-footer")
        .child(
            ElementBuilder::new("div")?
                .class("user-info")
                .text(&format!("👤 {}", identity.username))
                .build(),
        )?
        .child(
            ElementBuilder::new("button")?
                .attr("type", "button")?
                .class("logout-btn")
                .text("🚪 Logout")
                .on_click(move |_| {
                    SessionViewModel::new().logout(&state_logout);
                    state_logout.notify_subscribers();
                })?
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("aside")?
        .class("sidebar")
        .child(header)?
        .child(nav.build())?
        .child(footer)?
        .build())
}

pub fn render_content_header(view: View, identity: &Identity) -> Result<Element, JsValue> {
    let titles = ElementBuilder::new("div")?
        .child(ElementBuilder::new("h1")?.text(view.title()).build())?
        .child(
            ElementBuilder::new("p")?
                .class("subtitle")
                .text(&format!("Welcome back, {}", identity.username))
                .build(),
        )?
        .build();
    let badge = ElementBuilder::new("div")?
        .class("user-badge")
        .text(&format!("{} {}", identity.role.icon(), identity.role))
        .build();

    Ok(ElementBuilder::new("header")?
        .class("content-header")
        .child(titles)?
        .child(badge)?
        .build())
}
