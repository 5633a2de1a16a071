//! Runtime tunables for the page effects.
//!
//! The page may embed a JSON object in `<script id="portfolio-config">`.
//! Every key is optional. A value with the wrong type or outside its bounds
//! falls back to the default for that key only; an unparsable document falls
//! back to the defaults for everything.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::{
    interactions::{DEFAULT_CARD_STAGGER_MS, DEFAULT_TAG_STAGGER_SECONDS, DEFAULT_TILT_DIVISOR},
    logging::{LogLevel, DEFAULT_LOG_LEVEL},
    navigation::NavMetrics,
    particles::ParticleTimings,
    reveal::RevealOptions,
    scroll_top::DEFAULT_SCROLL_TOP_THRESHOLD,
    typing::TypingTimings,
};

pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

const NAVBAR_SCROLLED_OFFSET_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const HEADER_OFFSET_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const SECTION_LOOKAHEAD_BOUNDS: (f64, f64) = (0.0, 2_000.0);
const SCROLL_TOP_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 20_000.0);
const STEP_DELAY_MS_BOUNDS: (u32, u32) = (10, 2_000);
const PAUSE_DELAY_MS_BOUNDS: (u32, u32) = (0, 20_000);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const REVEAL_BOTTOM_MARGIN_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const TILT_DIVISOR_BOUNDS: (f64, f64) = (1.0, 100.0);
const TAG_STAGGER_SECONDS_BOUNDS: (f64, f64) = (0.0, 5.0);
const CARD_STAGGER_MS_BOUNDS: (u32, u32) = (0, 5_000);
const PARTICLE_INTERVAL_MS_BOUNDS: (u32, u32) = (100, 60_000);
const PARTICLE_LIFETIME_MS_BOUNDS: (u32, u32) = (500, 60_000);

#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub nav: NavMetrics,
    pub scroll_top_threshold: f64,
    pub typing: TypingTimings,
    pub reveal: RevealOptions,
    pub tilt_divisor: f64,
    pub tag_stagger_seconds: f64,
    pub card_stagger_ms: u32,
    pub particles: ParticleTimings,
    pub log_level: LogLevel,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            nav: NavMetrics::default(),
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
            typing: TypingTimings::default(),
            reveal: RevealOptions::default(),
            tilt_divisor: DEFAULT_TILT_DIVISOR,
            tag_stagger_seconds: DEFAULT_TAG_STAGGER_SECONDS,
            card_stagger_ms: DEFAULT_CARD_STAGGER_MS,
            particles: ParticleTimings::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawEffectsConfig {
    #[serde(deserialize_with = "lenient")]
    navbar_scrolled_offset: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    header_offset: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    section_lookahead: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    scroll_top_threshold: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    type_delay_ms: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    delete_delay_ms: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    hold_delay_ms: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    next_role_delay_ms: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    start_delay_ms: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    reveal_threshold: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    reveal_bottom_margin: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    tilt_divisor: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    tag_stagger_seconds: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    card_stagger_ms: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    particle_interval_ms: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    particle_lifetime_ms: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    log_level: Option<String>,
}

impl EffectsConfig {
    pub fn from_json(raw: &str) -> Self {
        let raw = serde_json::from_str::<RawEffectsConfig>(raw).unwrap_or_default();
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawEffectsConfig) -> Self {
        let defaults = Self::default();

        let nav = NavMetrics {
            scrolled_offset: f64_within(
                raw.navbar_scrolled_offset,
                defaults.nav.scrolled_offset,
                NAVBAR_SCROLLED_OFFSET_BOUNDS,
            ),
            header_offset: f64_within(
                raw.header_offset,
                defaults.nav.header_offset,
                HEADER_OFFSET_BOUNDS,
            ),
            section_lookahead: f64_within(
                raw.section_lookahead,
                defaults.nav.section_lookahead,
                SECTION_LOOKAHEAD_BOUNDS,
            ),
        };
        let typing = TypingTimings {
            type_ms: u32_within(raw.type_delay_ms, defaults.typing.type_ms, STEP_DELAY_MS_BOUNDS),
            delete_ms: u32_within(
                raw.delete_delay_ms,
                defaults.typing.delete_ms,
                STEP_DELAY_MS_BOUNDS,
            ),
            hold_ms: u32_within(raw.hold_delay_ms, defaults.typing.hold_ms, PAUSE_DELAY_MS_BOUNDS),
            next_role_ms: u32_within(
                raw.next_role_delay_ms,
                defaults.typing.next_role_ms,
                PAUSE_DELAY_MS_BOUNDS,
            ),
            start_ms: u32_within(
                raw.start_delay_ms,
                defaults.typing.start_ms,
                PAUSE_DELAY_MS_BOUNDS,
            ),
        };
        let reveal = RevealOptions {
            threshold: f64_within(
                raw.reveal_threshold,
                defaults.reveal.threshold,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            bottom_margin: f64_within(
                raw.reveal_bottom_margin,
                defaults.reveal.bottom_margin,
                REVEAL_BOTTOM_MARGIN_BOUNDS,
            ),
        };
        let particles = ParticleTimings {
            interval_ms: u32_within(
                raw.particle_interval_ms,
                defaults.particles.interval_ms,
                PARTICLE_INTERVAL_MS_BOUNDS,
            ),
            lifetime_ms: u32_within(
                raw.particle_lifetime_ms,
                defaults.particles.lifetime_ms,
                PARTICLE_LIFETIME_MS_BOUNDS,
            ),
        };

        Self {
            nav,
            scroll_top_threshold: f64_within(
                raw.scroll_top_threshold,
                defaults.scroll_top_threshold,
                SCROLL_TOP_THRESHOLD_BOUNDS,
            ),
            typing,
            reveal,
            tilt_divisor: f64_within(raw.tilt_divisor, defaults.tilt_divisor, TILT_DIVISOR_BOUNDS),
            tag_stagger_seconds: f64_within(
                raw.tag_stagger_seconds,
                defaults.tag_stagger_seconds,
                TAG_STAGGER_SECONDS_BOUNDS,
            ),
            card_stagger_ms: u32_within(
                raw.card_stagger_ms,
                defaults.card_stagger_ms,
                CARD_STAGGER_MS_BOUNDS,
            ),
            particles,
            log_level: raw
                .log_level
                .as_deref()
                .and_then(LogLevel::parse)
                .unwrap_or(defaults.log_level),
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn f64_within(value: Option<f64>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn u32_within(value: Option<u32>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(EffectsConfig::from_json("{}"), EffectsConfig::default());
        assert_eq!(EffectsConfig::from_json("   "), EffectsConfig::default());
    }

    #[test]
    fn malformed_document_yields_defaults() {
        assert_eq!(EffectsConfig::from_json("{ not json"), EffectsConfig::default());
        assert_eq!(EffectsConfig::from_json("42"), EffectsConfig::default());
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = EffectsConfig::default();

        assert_eq!(config.nav.scrolled_offset, 50.0);
        assert_eq!(config.nav.header_offset, 80.0);
        assert_eq!(config.nav.section_lookahead, 100.0);
        assert_eq!(config.scroll_top_threshold, 300.0);
        assert_eq!(config.typing.type_ms, 100);
        assert_eq!(config.typing.delete_ms, 50);
        assert_eq!(config.typing.hold_ms, 2_000);
        assert_eq!(config.typing.next_role_ms, 500);
        assert_eq!(config.typing.start_ms, 1_000);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.particles.interval_ms, 2_000);
        assert_eq!(config.particles.lifetime_ms, 6_000);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn valid_values_override_defaults() {
        let config = EffectsConfig::from_json(
            r#"{
                "navbarScrolledOffset": 120,
                "typeDelayMs": 80,
                "revealThreshold": 0.25,
                "particleLifetimeMs": 9000,
                "logLevel": "debug"
            }"#,
        );

        assert_eq!(config.nav.scrolled_offset, 120.0);
        assert_eq!(config.typing.type_ms, 80);
        assert_eq!(config.reveal.threshold, 0.25);
        assert_eq!(config.particles.lifetime_ms, 9_000);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_values_fall_back_per_key() {
        let config = EffectsConfig::from_json(
            r#"{ "tiltDivisor": 0, "particleIntervalMs": 5, "headerOffset": 64 }"#,
        );

        assert_eq!(config.tilt_divisor, 10.0);
        assert_eq!(config.particles.interval_ms, 2_000);
        assert_eq!(config.nav.header_offset, 64.0);
    }

    #[test]
    fn wrongly_typed_values_fall_back_per_key() {
        let config = EffectsConfig::from_json(
            r#"{ "holdDelayMs": "long", "cardStaggerMs": -3, "logLevel": 4, "sectionLookahead": 40 }"#,
        );

        assert_eq!(config.typing.hold_ms, 2_000);
        assert_eq!(config.card_stagger_ms, 200);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.nav.section_lookahead, 40.0);
    }
}
