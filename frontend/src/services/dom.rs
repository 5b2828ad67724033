//! Thin wrappers over the handful of browser APIs the app touches directly.

use anyhow::{anyhow, Context, Result};
use shared::chrome::Theme;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!("{:?}", err)
}

/// Set `data-theme` on `<html>` and the dark-mode class on `<body>`
pub fn apply_theme(theme: Theme) -> Result<()> {
    let document = gloo::utils::document();

    let root = document
        .document_element()
        .context("document has no root element")?;
    root.set_attribute("data-theme", theme.as_str())
        .map_err(js_error)
        .context("failed to set data-theme")?;

    let classes = gloo::utils::body().class_list();
    let updated = match theme.body_class() {
        Some(class) => classes.add_1(class),
        None => classes.remove_1("dark-mode"),
    };
    updated
        .map_err(js_error)
        .context("failed to update body class")?;

    Ok(())
}

/// Current path of the page, used to pick which page to mount
pub fn current_path() -> Result<String> {
    gloo::utils::window()
        .location()
        .pathname()
        .map_err(js_error)
        .context("failed to read location")
}

pub fn navigate(url: &str) -> Result<()> {
    gloo::utils::window()
        .location()
        .set_href(url)
        .map_err(js_error)
        .with_context(|| format!("failed to navigate to {}", url))
}

/// Vertical scroll offset in pixels
pub fn scroll_offset() -> f64 {
    gloo::utils::window().scroll_y().unwrap_or(0.0)
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    gloo::utils::window().scroll_to_with_scroll_to_options(&options);
}

/// Blocking native confirmation dialog
pub fn confirm(message: &str) -> bool {
    gloo::dialogs::confirm(message)
}
