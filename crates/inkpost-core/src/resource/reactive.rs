//! Event-driven field derivations of the admin forms.
//!
//! The form layer reports edits with the instant they happened and polls
//! with the current instant. No timers live here.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::slug::slugify;

/// Quiet period after the last keystroke before a live field fires.
pub const LIVE_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Fires once after input has been quiet for `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Register input at `now`, pushing the deadline back.
    pub fn input(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Whether input is waiting for its quiet period to end.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// When a derived slug may overwrite the slug field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlugMode {
    /// Every debounced source edit recomputes the slug, discarding manual edits.
    #[default]
    Always,
    /// Recompute until the slug is edited by hand, then leave it alone.
    UntilOverridden,
}

impl std::str::FromStr for SlugMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(SlugMode::Always),
            "until-overridden" => Ok(SlugMode::UntilOverridden),
            other => Err(format!("unknown slug mode: {other}")),
        }
    }
}

/// Keeps a slug field in step with a source field (title → slug, name → slug).
#[derive(Debug, Clone)]
pub struct SlugSync {
    mode: SlugMode,
    debouncer: Debouncer,
    source: String,
    overridden: bool,
}

impl SlugSync {
    pub fn new(mode: SlugMode) -> Self {
        Self {
            mode,
            debouncer: Debouncer::new(LIVE_DEBOUNCE),
            source: String::new(),
            overridden: false,
        }
    }

    /// The source field changed to `text` at `now`.
    pub fn source_changed(&mut self, text: &str, now: Instant) {
        self.source.clear();
        self.source.push_str(text);
        self.debouncer.input(now);
    }

    /// The slug field was edited by hand.
    pub fn slug_edited(&mut self) {
        self.overridden = true;
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    /// New slug value if the quiet period is over and the mode allows it.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if !self.debouncer.poll(now) {
            return None;
        }
        if self.mode == SlugMode::UntilOverridden && self.overridden {
            return None;
        }
        Some(slugify(&self.source))
    }
}
