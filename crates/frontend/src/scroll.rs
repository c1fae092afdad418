/// Height of the fixed navbar; anchor targets stop just below it.
const HEADER_OFFSET_PX: f64 = 70.0;

/// Pure function: document-space scroll position that puts an element's top
/// edge below the fixed header. Usable in unit tests (no web_sys
/// dependency).
pub fn scroll_target_top(element_viewport_top: f64, page_y_offset: f64) -> f64 {
    element_viewport_top + page_y_offset - HEADER_OFFSET_PX
}

/// Smooth-scroll the window to an in-page anchor like `"#services"`.
/// A bare `#` or a missing target silently does nothing.
pub fn scroll_to_section(anchor: &str) {
    let id = anchor.trim_start_matches('#');
    if id.is_empty() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        log::debug!("no section with id '{id}', scroll skipped");
        return;
    };

    let rect = target.get_bounding_client_rect();
    let page_y = window.page_y_offset().unwrap_or(0.0);

    let options = web_sys::ScrollToOptions::new();
    options.set_top(scroll_target_top(rect.top(), page_y));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target_from_page_top() {
        // Section 500px down the document, window not yet scrolled.
        let top = scroll_target_top(500.0, 0.0);
        assert!((top - 430.0).abs() < 1e-9);
    }

    #[test]
    fn test_scroll_target_mid_page() {
        // Viewport-relative top of 120px while scrolled 800px down.
        let top = scroll_target_top(120.0, 800.0);
        assert!((top - 850.0).abs() < 1e-9);
    }

    #[test]
    fn test_scroll_target_above_viewport() {
        // Targets above the current viewport produce a smaller offset.
        let top = scroll_target_top(-300.0, 800.0);
        assert!((top - 430.0).abs() < 1e-9);
    }
}
