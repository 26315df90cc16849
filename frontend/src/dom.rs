//! Thin helpers over browser APIs used by the components.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, File, FileList, ScrollBehavior, ScrollIntoViewOptions};

/// Show a blocking notice.
pub fn notify(message: &str) {
    log::warn!("🔔 {}", message);
    if let Err(e) = gloo_utils::window().alert_with_message(message) {
        log::error!("Failed to show alert: {:?}", e);
    }
}

/// Collect a `FileList` into owned handles.
pub fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Smoothly scroll `element` into view.
pub fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smoothly scroll to the element with the given id, if present.
pub fn scroll_to_id(id: &str) {
    match gloo_utils::document().get_element_by_id(id) {
        Some(element) => scroll_into_view_smooth(&element),
        None => log::debug!("No element #{} to scroll to", id),
    }
}

/// Whether the event target sits inside an element matching `selector`.
pub fn event_within(ev: &Event, selector: &str) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}
