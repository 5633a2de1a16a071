//! Typing animation for the hero subtitle.
//!
//! The animation is a two-phase state machine over a fixed role list. Each
//! [`TypingCursor::step`] is a pure transition that returns the next cursor
//! and how long to wait before the following step; the caller owns the timer.

use std::rc::Rc;

pub const DEFAULT_TYPE_DELAY_MS: u32 = 100;
pub const DEFAULT_DELETE_DELAY_MS: u32 = 50;
pub const DEFAULT_HOLD_DELAY_MS: u32 = 2_000;
pub const DEFAULT_NEXT_ROLE_DELAY_MS: u32 = 500;
pub const DEFAULT_START_DELAY_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimings {
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Pause once a role is fully typed.
    pub hold_ms: u32,
    /// Pause once a role is fully deleted, before the next one starts.
    pub next_role_ms: u32,
    /// Wait between the page load and the first step.
    pub start_ms: u32,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_ms: DEFAULT_TYPE_DELAY_MS,
            delete_ms: DEFAULT_DELETE_DELAY_MS,
            hold_ms: DEFAULT_HOLD_DELAY_MS,
            next_role_ms: DEFAULT_NEXT_ROLE_DELAY_MS,
            start_ms: DEFAULT_START_DELAY_MS,
        }
    }
}

/// Non-empty list of non-empty roles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleList {
    roles: Rc<[String]>,
}

impl RoleList {
    pub fn new<I, S>(roles: I) -> Result<Self, &'static str>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();

        if roles.is_empty() {
            return Err("role list is empty");
        }

        if roles.iter().any(|role| role.is_empty()) {
            return Err("role list contains an empty role");
        }

        Ok(Self {
            roles: roles.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    fn role(&self, index: usize) -> &str {
        &self.roles[index % self.roles.len()]
    }

    fn char_len(&self, index: usize) -> usize {
        self.role(index).chars().count()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Typing,
    Deleting,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypingCursor {
    pub role_index: usize,
    pub char_index: usize,
    pub phase: Phase,
}

impl TypingCursor {
    pub fn step(self, roles: &RoleList, timings: &TypingTimings) -> (Self, u32) {
        let role_len = roles.char_len(self.role_index);
        let mut next = self;

        match self.phase {
            Phase::Typing => {
                next.char_index = (self.char_index + 1).min(role_len);

                if next.char_index == role_len {
                    next.phase = Phase::Deleting;
                    (next, timings.hold_ms)
                } else {
                    (next, timings.type_ms)
                }
            }
            Phase::Deleting => {
                next.char_index = self.char_index.saturating_sub(1);

                if next.char_index == 0 {
                    next.phase = Phase::Typing;
                    next.role_index = (self.role_index + 1) % roles.len();
                    (next, timings.next_role_ms)
                } else {
                    (next, timings.delete_ms)
                }
            }
        }
    }

    pub fn visible_text(&self, roles: &RoleList) -> String {
        roles
            .role(self.role_index)
            .chars()
            .take(self.char_index)
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EngineStatus {
    Idle,
    Running,
    Stopped,
}

/// The single typing animation of the page.
///
/// `start` is honored once and `stop` is terminal: the animation lives as long
/// as the page and is never restarted.
#[derive(Clone, Debug)]
pub struct TypingEngine {
    roles: RoleList,
    timings: TypingTimings,
    cursor: TypingCursor,
    status: EngineStatus,
    steps: u64,
}

impl TypingEngine {
    pub fn new(roles: RoleList, timings: TypingTimings) -> Self {
        Self {
            roles,
            timings,
            cursor: TypingCursor::default(),
            status: EngineStatus::Idle,
            steps: 0,
        }
    }

    /// Returns the delay before the first step, or `None` if already started.
    pub fn start(&mut self) -> Option<u32> {
        if self.status != EngineStatus::Idle {
            return None;
        }

        self.status = EngineStatus::Running;
        Some(self.timings.start_ms)
    }

    /// Runs one step and returns the delay before the next one.
    pub fn advance(&mut self) -> Option<u32> {
        if self.status != EngineStatus::Running {
            return None;
        }

        let (cursor, delay) = self.cursor.step(&self.roles, &self.timings);
        self.cursor = cursor;
        self.steps += 1;
        Some(delay)
    }

    pub fn stop(&mut self) {
        self.status = EngineStatus::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.status == EngineStatus::Running
    }

    /// Text to display, `None` until the first step has run.
    pub fn text(&self) -> Option<String> {
        (self.steps > 0).then(|| self.cursor.visible_text(&self.roles))
    }
}
