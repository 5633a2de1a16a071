//! Navigation bar state: mobile menu, scroll marker and active section.

pub const DEFAULT_SCROLLED_OFFSET: f64 = 50.0;
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;
pub const DEFAULT_SECTION_LOOKAHEAD: f64 = 100.0;

const BAR_TOP_OPEN: &str = "rotate(45deg) translate(5px, 5px)";
const BAR_BOTTOM_OPEN: &str = "rotate(-45deg) translate(7px, -6px)";
const BAR_TRANSFORM_NEUTRAL: &str = "none";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavMetrics {
    /// Scroll offset past which the bar is marked as scrolled.
    pub scrolled_offset: f64,
    /// Height of the fixed header, subtracted from smooth-scroll targets.
    pub header_offset: f64,
    pub section_lookahead: f64,
}

impl Default for NavMetrics {
    fn default() -> Self {
        Self {
            scrolled_offset: DEFAULT_SCROLLED_OFFSET,
            header_offset: DEFAULT_HEADER_OFFSET,
            section_lookahead: DEFAULT_SECTION_LOOKAHEAD,
        }
    }
}

impl NavMetrics {
    pub fn is_scrolled(&self, scroll_offset: f64) -> bool {
        scroll_offset > self.scrolled_offset
    }

    pub fn scroll_target(&self, section_top: f64) -> f64 {
        section_top - self.header_offset
    }

    /// Id of the last section, in document order, whose top minus the
    /// lookahead has been scrolled past.
    pub fn active_section<'a>(
        &self,
        sections: &[(&'a str, f64)],
        scroll_offset: f64,
    ) -> Option<&'a str> {
        let mut current = None;

        for &(id, top) in sections {
            if scroll_offset >= top - self.section_lookahead {
                current = Some(id);
            }
        }

        current
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    LinkClicked,
    Dismiss,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Returns `None` when the action leaves the menu unchanged.
    pub fn apply(self, action: MenuAction) -> Option<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::LinkClicked => false,
            MenuAction::Dismiss if self.open => false,
            MenuAction::Dismiss => return None,
        };

        (open != self.open).then_some(Self { open })
    }

    pub fn bars(&self) -> HamburgerBars {
        if self.open {
            HamburgerBars {
                top_transform: BAR_TOP_OPEN,
                middle_opacity: "0",
                bottom_transform: BAR_BOTTOM_OPEN,
            }
        } else {
            HamburgerBars::neutral()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HamburgerBars {
    pub top_transform: &'static str,
    pub middle_opacity: &'static str,
    pub bottom_transform: &'static str,
}

impl HamburgerBars {
    pub fn neutral() -> Self {
        Self {
            top_transform: BAR_TRANSFORM_NEUTRAL,
            middle_opacity: "1",
            bottom_transform: BAR_TRANSFORM_NEUTRAL,
        }
    }

    pub fn styles(&self) -> [String; 3] {
        [
            format!("transform: {};", self.top_transform),
            format!("opacity: {};", self.middle_opacity),
            format!("transform: {};", self.bottom_transform),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(&'static str, f64)> {
        vec![
            ("home", 0.0),
            ("about", 700.0),
            ("skills", 1_400.0),
            ("contact", 2_400.0),
        ]
    }

    #[test]
    fn scrolled_marker_uses_strict_threshold() {
        let metrics = NavMetrics::default();

        assert!(!metrics.is_scrolled(0.0));
        assert!(!metrics.is_scrolled(50.0));
        assert!(metrics.is_scrolled(50.5));
    }

    #[test]
    fn scroll_target_compensates_for_header() {
        let metrics = NavMetrics::default();

        assert_eq!(metrics.scroll_target(700.0), 620.0);
        assert_eq!(metrics.scroll_target(40.0), -40.0);
    }

    #[test]
    fn active_section_respects_lookahead() {
        let metrics = NavMetrics::default();
        let sections = sections();

        assert_eq!(metrics.active_section(&sections, 0.0), Some("home"));
        assert_eq!(metrics.active_section(&sections, 599.0), Some("home"));
        assert_eq!(metrics.active_section(&sections, 600.0), Some("about"));
        assert_eq!(metrics.active_section(&sections, 5_000.0), Some("contact"));
    }

    #[test]
    fn active_section_is_none_before_first_section() {
        let metrics = NavMetrics::default();
        let sections = vec![("about", 700.0), ("contact", 1_500.0)];

        assert_eq!(metrics.active_section(&sections, 100.0), None);
        assert_eq!(metrics.active_section(&[], 100.0), None);
    }

    #[test]
    fn later_sections_win_when_several_qualify() {
        let metrics = NavMetrics::default();
        let sections = vec![("first", 500.0), ("second", 500.0)];

        assert_eq!(metrics.active_section(&sections, 450.0), Some("second"));
    }

    #[test]
    fn toggle_opens_menu_and_sets_open_bars() {
        let opened = MenuState::default()
            .apply(MenuAction::Toggle)
            .expect("toggle changes state");

        assert!(opened.open);
        assert_eq!(
            opened.bars(),
            HamburgerBars {
                top_transform: "rotate(45deg) translate(5px, 5px)",
                middle_opacity: "0",
                bottom_transform: "rotate(-45deg) translate(7px, -6px)",
            }
        );
    }

    #[test]
    fn link_click_closes_menu_and_resets_bars() {
        let open = MenuState { open: true };

        let closed = open
            .apply(MenuAction::LinkClicked)
            .expect("link click closes menu");
        assert!(!closed.open);
        assert_eq!(closed.bars(), HamburgerBars::neutral());

        assert_eq!(closed.apply(MenuAction::LinkClicked), None);
    }

    #[test]
    fn dismiss_only_acts_on_open_menu() {
        assert_eq!(MenuState::default().apply(MenuAction::Dismiss), None);
        assert_eq!(
            MenuState { open: true }.apply(MenuAction::Dismiss),
            Some(MenuState { open: false })
        );
    }

    #[test]
    fn bar_styles_render_css_declarations() {
        let [top, middle, bottom] = HamburgerBars::neutral().styles();

        assert_eq!(top, "transform: none;");
        assert_eq!(middle, "opacity: 1;");
        assert_eq!(bottom, "transform: none;");
    }
}
