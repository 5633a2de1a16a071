//! Back-to-top button appended to the document body.

pub const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 300.0;

const BUTTON_BASE_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; \
height: 50px; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; \
border: none; border-radius: 50%; font-size: 1.5rem; cursor: pointer; \
transition: all 0.3s ease; z-index: 999; box-shadow: 0 4px 16px rgba(0, 0, 0, 0.3);";

pub fn is_visible(scroll_offset: f64, threshold: f64) -> bool {
    scroll_offset > threshold
}

pub fn button_style(visible: bool, hovered: bool) -> String {
    let (opacity, visibility) = if visible { ("1", "visible") } else { ("0", "hidden") };
    let transform = if hovered {
        "translateY(-5px) scale(1.1)"
    } else {
        "translateY(0) scale(1)"
    };

    format!("{BUTTON_BASE_STYLE} opacity: {opacity}; visibility: {visibility}; transform: {transform};")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_threshold_is_strict() {
        assert!(!is_visible(0.0, DEFAULT_SCROLL_TOP_THRESHOLD));
        assert!(!is_visible(300.0, DEFAULT_SCROLL_TOP_THRESHOLD));
        assert!(is_visible(301.0, DEFAULT_SCROLL_TOP_THRESHOLD));
    }

    #[test]
    fn hidden_button_is_transparent_and_not_visible() {
        let style = button_style(false, false);

        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("visibility: hidden;"));
        assert!(style.contains("transform: translateY(0) scale(1);"));
    }

    #[test]
    fn hovered_button_lifts_and_grows() {
        let style = button_style(true, true);

        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("visibility: visible;"));
        assert!(style.contains("transform: translateY(-5px) scale(1.1);"));
        assert!(style.starts_with("position: fixed;"));
    }
}
