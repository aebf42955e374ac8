pub mod components;

/// Scrolls the viewport to an in-page anchor. No-op when the element is
/// missing or outside a browser context.
pub fn scroll_to(anchor_id: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        if let Some(element) = document.get_element_by_id(anchor_id) {
            element.scroll_into_view();
        }
    }
}
