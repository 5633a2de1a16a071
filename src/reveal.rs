//! One-shot viewport reveal for cards and lazily loaded images.

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_BOTTOM_MARGIN: f64 = 100.0;

pub const REVEALED_CLASS: &str = "fade-in";
pub const LOADED_CLASS: &str = "loaded";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction that counts as entering the viewport.
    pub threshold: f64,
    /// Bottom inset of the root box, so reveals fire slightly before entry.
    pub bottom_margin: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            bottom_margin: DEFAULT_REVEAL_BOTTOM_MARGIN,
        }
    }
}

impl RevealOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }
}

/// Fires on the first intersecting observation and never again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }

        self.fired = true;
        true
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_insets_bottom_edge() {
        assert_eq!(RevealOptions::default().root_margin(), "0px 0px -100px 0px");

        let options = RevealOptions {
            threshold: 0.5,
            bottom_margin: 40.0,
        };
        assert_eq!(options.root_margin(), "0px 0px -40px 0px");
    }

    #[test]
    fn latch_ignores_non_intersecting_entries() {
        let mut latch = RevealLatch::default();

        assert!(!latch.observe(false));
        assert!(!latch.fired());
    }

    #[test]
    fn latch_fires_once_even_after_leaving_and_reentering() {
        let mut latch = RevealLatch::default();

        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.fired());
    }
}
