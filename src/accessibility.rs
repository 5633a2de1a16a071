pub const FOCUSABLE_SELECTOR: &str =
    "a, button, input, textarea, select, [tabindex]:not([tabindex=\"-1\"])";

pub const FOCUS_OUTLINE: &str = "2px solid #667eea";
pub const FOCUS_OUTLINE_OFFSET: &str = "2px";
pub const BLUR_OUTLINE: &str = "none";

const DISMISS_KEY: &str = "Escape";

pub fn is_dismiss_key(key: &str) -> bool {
    key == DISMISS_KEY
}

/// `(property, value)` pairs applied to a focusable element.
pub fn focus_ring(focused: bool) -> &'static [(&'static str, &'static str)] {
    if focused {
        &[("outline", FOCUS_OUTLINE), ("outline-offset", FOCUS_OUTLINE_OFFSET)]
    } else {
        &[("outline", BLUR_OUTLINE)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_escape_dismisses() {
        assert!(is_dismiss_key("Escape"));
        assert!(!is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
    }

    #[test]
    fn focus_ring_is_removed_on_blur() {
        assert_eq!(
            focus_ring(true),
            &[("outline", "2px solid #667eea"), ("outline-offset", "2px")]
        );
        assert_eq!(focus_ring(false), &[("outline", "none")]);
    }

    #[test]
    fn selector_skips_negative_tab_index() {
        assert!(FOCUSABLE_SELECTOR.contains(":not([tabindex=\"-1\"])"));
    }
}
