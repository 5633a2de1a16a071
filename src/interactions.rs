//! Hover, tilt and staggered entrance styles for tags and cards.

pub const DEFAULT_TILT_DIVISOR: f64 = 10.0;
pub const DEFAULT_TAG_STAGGER_SECONDS: f64 = 0.1;
pub const DEFAULT_CARD_STAGGER_MS: u32 = 200;

const TAG_HOVER_TRANSFORM: &str = "scale(1.1) rotate(2deg)";
const TAG_REST_TRANSFORM: &str = "scale(1) rotate(0deg)";
const TILT_NEUTRAL_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";
const CARD_HIDDEN_STYLE: &str = "opacity: 0; transform: translateX(-50px);";
const CARD_ENTERED_STYLE: &str = "transition: all 0.6s ease; opacity: 1; transform: translateX(0);";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Rotation for a pointer at viewport coordinates `(client_x, client_y)`
    /// over a card occupying `rect`.
    pub fn from_pointer(client_x: f64, client_y: f64, rect: Rect, divisor: f64) -> Self {
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;

        Self {
            rotate_x: (y - center_y) / divisor,
            rotate_y: (center_x - x) / divisor,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-5px)",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn neutral_transform() -> &'static str {
        TILT_NEUTRAL_TRANSFORM
    }
}

pub fn tag_transform(hovered: bool) -> &'static str {
    if hovered {
        TAG_HOVER_TRANSFORM
    } else {
        TAG_REST_TRANSFORM
    }
}

pub fn tag_animation_delay(index: usize, step_seconds: f64) -> String {
    let delay = index as f64 * step_seconds;
    format!("{}s", (delay * 1_000.0).round() / 1_000.0)
}

pub fn card_entrance_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

pub fn card_entrance_style(entered: bool) -> &'static str {
    if entered {
        CARD_ENTERED_STYLE
    } else {
        CARD_HIDDEN_STYLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Rect {
        Rect {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 100.0,
        }
    }

    #[test]
    fn pointer_at_center_does_not_tilt() {
        let tilt = Tilt::from_pointer(200.0, 100.0, card(), DEFAULT_TILT_DIVISOR);

        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn pointer_at_top_left_tilts_towards_viewer() {
        let tilt = Tilt::from_pointer(100.0, 50.0, card(), DEFAULT_TILT_DIVISOR);

        assert_eq!(tilt.rotate_x, -5.0);
        assert_eq!(tilt.rotate_y, 10.0);
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(-5deg) rotateY(10deg) translateY(-5px)"
        );
    }

    #[test]
    fn neutral_transform_resets_rotation_and_lift() {
        assert_eq!(
            Tilt::neutral_transform(),
            "perspective(1000px) rotateX(0) rotateY(0) translateY(0)"
        );
    }

    #[test]
    fn tag_hover_toggles_scale_and_rotation() {
        assert_eq!(tag_transform(true), "scale(1.1) rotate(2deg)");
        assert_eq!(tag_transform(false), "scale(1) rotate(0deg)");
    }

    #[test]
    fn tag_delays_step_by_a_tenth_of_a_second() {
        let delays: Vec<String> = (0..4)
            .map(|index| tag_animation_delay(index, DEFAULT_TAG_STAGGER_SECONDS))
            .collect();

        assert_eq!(delays, vec!["0s", "0.1s", "0.2s", "0.3s"]);
    }

    #[test]
    fn card_entrance_is_staggered_by_index() {
        assert_eq!(card_entrance_delay_ms(0, DEFAULT_CARD_STAGGER_MS), 0);
        assert_eq!(card_entrance_delay_ms(3, DEFAULT_CARD_STAGGER_MS), 600);
        assert_eq!(card_entrance_style(false), "opacity: 0; transform: translateX(-50px);");
        assert!(card_entrance_style(true).starts_with("transition: all 0.6s ease;"));
    }
}
