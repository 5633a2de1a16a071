//! Decorative background particles.
//!
//! A particle is spawned every `interval_ms` at a random spot of the viewport
//! and is due for removal exactly `lifetime_ms` after it was created. The
//! removal time does not account for the particle's random animation delay,
//! so late-starting particles may disappear before their fade-out.

use std::collections::VecDeque;

pub const DEFAULT_PARTICLE_INTERVAL_MS: u32 = 2_000;
pub const DEFAULT_PARTICLE_LIFETIME_MS: u32 = 6_000;

pub const FLOAT_KEYFRAMES_ID: &str = "particle-float-keyframes";
pub const FLOAT_KEYFRAMES: &str = "@keyframes float {
    0%, 100% { transform: translateY(0) translateX(0); opacity: 0; }
    10% { opacity: 1; }
    90% { opacity: 1; }
    50% { transform: translateY(-100px) translateX(50px); }
}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticleTimings {
    pub interval_ms: u32,
    /// Lifetime of a particle, also the duration of its float animation.
    pub lifetime_ms: u32,
}

impl Default for ParticleTimings {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_PARTICLE_INTERVAL_MS,
            lifetime_ms: DEFAULT_PARTICLE_LIFETIME_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub left: f64,
    pub top: f64,
    pub animation_delay_ms: f64,
    pub expires_at_ms: f64,
    animation_ms: u32,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "position: fixed; width: 4px; height: 4px; background: rgba(102, 126, 234, 0.5); \
             border-radius: 50%; pointer-events: none; z-index: -1; \
             animation: float {}s ease-in-out infinite; \
             left: {}px; top: {}px; animation-delay: {}s;",
            f64::from(self.animation_ms) / 1_000.0,
            self.left,
            self.top,
            self.animation_delay_ms / 1_000.0,
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParticleEmitter {
    timings: ParticleTimings,
    next_id: u64,
    live: VecDeque<(u64, f64)>,
}

impl ParticleEmitter {
    pub fn new(timings: ParticleTimings) -> Self {
        Self {
            timings,
            next_id: 0,
            live: VecDeque::new(),
        }
    }

    /// Creates a particle at `now_ms`. `sample` must yield values in `[0, 1)`.
    pub fn spawn(
        &mut self,
        now_ms: f64,
        viewport: Viewport,
        mut sample: impl FnMut() -> f64,
    ) -> Particle {
        let lifetime_ms = f64::from(self.timings.lifetime_ms);
        let id = self.next_id;
        self.next_id += 1;

        let particle = Particle {
            id,
            left: unit(sample()) * viewport.width,
            top: unit(sample()) * viewport.height,
            animation_delay_ms: unit(sample()) * lifetime_ms,
            expires_at_ms: now_ms + lifetime_ms,
            animation_ms: self.timings.lifetime_ms,
        };

        self.live.push_back((id, particle.expires_at_ms));
        particle
    }

    /// Ids of particles whose lifetime has elapsed by `now_ms`, oldest first.
    pub fn drain_expired(&mut self, now_ms: f64) -> Vec<u64> {
        let mut expired = Vec::new();

        while let Some(&(id, expires_at)) = self.live.front() {
            if expires_at > now_ms {
                break;
            }

            self.live.pop_front();
            expired.push(id);
        }

        expired
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

fn unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0 - f64::EPSILON)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport {
            width: 1_280.0,
            height: 720.0,
        }
    }

    fn samples(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut values = values.iter().copied().cycle();
        move || values.next().unwrap_or(0.0)
    }

    #[test]
    fn particle_is_placed_inside_viewport_with_bounded_delay() {
        let mut emitter = ParticleEmitter::new(ParticleTimings::default());

        let particle = emitter.spawn(1_000.0, viewport(), samples(&[0.5, 0.25, 0.75]));
        assert_eq!(particle.left, 640.0);
        assert_eq!(particle.top, 180.0);
        assert_eq!(particle.animation_delay_ms, 4_500.0);

        let edge = emitter.spawn(1_000.0, viewport(), samples(&[1.0, 2.0, f64::NAN]));
        assert!(edge.left < 1_280.0);
        assert!(edge.top < 720.0);
        assert_eq!(edge.animation_delay_ms, 0.0);
    }

    #[test]
    fn particle_expires_exactly_one_lifetime_after_creation() {
        let mut emitter = ParticleEmitter::new(ParticleTimings::default());

        let particle = emitter.spawn(2_000.0, viewport(), samples(&[0.9]));
        assert_eq!(particle.expires_at_ms, 8_000.0);
        assert!(emitter.drain_expired(7_999.0).is_empty());
        assert_eq!(emitter.drain_expired(8_000.0), vec![particle.id]);
        assert_eq!(emitter.live_count(), 0);
    }

    #[test]
    fn steady_state_holds_lifetime_over_interval_particles() {
        let timings = ParticleTimings::default();
        let mut emitter = ParticleEmitter::new(timings);
        let mut now = 0.0;
        let mut removed = Vec::new();

        for _ in 0..10 {
            now += f64::from(timings.interval_ms);
            removed.extend(emitter.drain_expired(now));
            emitter.spawn(now, viewport(), samples(&[0.1]));
        }

        assert_eq!(emitter.live_count(), 3);
        assert_eq!(removed, (0..7).collect::<Vec<u64>>());
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut emitter = ParticleEmitter::new(ParticleTimings::default());

        let first = emitter.spawn(0.0, viewport(), samples(&[0.3]));
        let second = emitter.spawn(0.0, viewport(), samples(&[0.3]));
        assert!(second.id > first.id);
    }

    #[test]
    fn style_carries_position_and_animation() {
        let mut emitter = ParticleEmitter::new(ParticleTimings::default());
        let particle = emitter.spawn(0.0, viewport(), samples(&[0.5, 0.5, 0.5]));
        let style = particle.style();

        assert!(style.contains("left: 640px;"));
        assert!(style.contains("top: 360px;"));
        assert!(style.contains("animation-delay: 3s;"));
        assert!(style.contains("animation: float 6s ease-in-out infinite;"));
    }
}
