//! Theme state container.
//!
//! The store owns the active theme and runs the two-phase transition:
//!
//! ```text
//! set_theme(next)        +50ms                  +300ms
//!   Idle ──────────► Entering ──────────► Settling ──────────► Idle
//!          transitioning=true   id=next, persisted   transitioning=false
//! ```
//!
//! Time is passed in by the caller, so the event loop (or a test) decides when
//! scheduled phases fire by calling [`ThemeStore::tick`].

use crate::domain::{ThemeId, ThemeSelection};
use crate::infrastructure::PreferenceStore;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::time::{Duration, Instant};

/// Key under which the selected theme id is persisted.
pub const STORAGE_KEY: &str = "thememorph-theme";

/// Delay between entering the transition and applying the new theme.
pub const ENTER_DELAY: Duration = Duration::from_millis(50);

/// Delay between applying the new theme and leaving the transition.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Where the store is in the transition sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    /// Transition flagged, old theme still visible.
    Entering { target: ThemeId, apply_at: Instant },
    /// New theme applied, transition flag still set.
    Settling { settle_at: Instant },
}

pub struct ThemeStore<P: PreferenceStore = Box<dyn PreferenceStore>> {
    current: ThemeId,
    phase: TransitionPhase,
    preferences: P,
    subscribers: Vec<Sender<ThemeSelection>>,
}

impl<P: PreferenceStore> ThemeStore<P> {
    /// Builds the store, adopting a valid persisted theme if there is one.
    pub fn initialize(preferences: P) -> Self {
        let current = match preferences.get(STORAGE_KEY) {
            Some(raw) => ThemeId::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "ignoring unknown persisted theme");
                ThemeId::default()
            }),
            None => ThemeId::default(),
        };
        tracing::info!(theme = %current, "theme store initialized");

        Self {
            current,
            phase: TransitionPhase::Idle,
            preferences,
            subscribers: Vec::new(),
        }
    }

    pub fn get_current(&self) -> ThemeSelection {
        ThemeSelection {
            id: self.current,
            transitioning: self.phase != TransitionPhase::Idle,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// The theme the store is heading to: the pending target while entering,
    /// otherwise the current theme.
    pub fn target(&self) -> ThemeId {
        match self.phase {
            TransitionPhase::Entering { target, .. } => target,
            _ => self.current,
        }
    }

    /// Starts a transition to `next`.
    ///
    /// Requesting the theme the store is already heading to does nothing. A
    /// request made while a transition is pending supersedes it: the earlier
    /// target is never applied and the enter delay restarts. Retargeting
    /// sends no notification, since the visible selection (old id,
    /// transitioning) is unchanged. Asking for the current theme while
    /// entering cancels the switch without persisting anything.
    pub fn set_theme(&mut self, next: ThemeId, now: Instant) {
        if next == self.target() {
            return;
        }

        let apply_at = now + ENTER_DELAY;
        match self.phase {
            TransitionPhase::Idle => {
                tracing::info!(from = %self.current, to = %next, "theme transition started");
                self.phase = TransitionPhase::Entering { target: next, apply_at };
                self.notify();
            }
            TransitionPhase::Entering { target, .. } if next == self.current => {
                tracing::debug!(cancelled = %target, theme = %self.current, "theme transition cancelled");
                self.phase = TransitionPhase::Idle;
                self.notify();
            }
            TransitionPhase::Entering { target, .. } => {
                tracing::debug!(superseded = %target, to = %next, "theme transition retargeted");
                self.phase = TransitionPhase::Entering { target: next, apply_at };
            }
            TransitionPhase::Settling { .. } => {
                tracing::debug!(from = %self.current, to = %next, "theme transition restarted while settling");
                self.phase = TransitionPhase::Entering { target: next, apply_at };
                // Observers already see transitioning=true; nothing to announce yet.
            }
        }
    }

    /// Accepts an untyped theme id. Unknown ids are ignored entirely.
    pub fn request_theme(&mut self, raw: &str, now: Instant) {
        match ThemeId::parse(raw) {
            Some(id) => self.set_theme(id, now),
            None => tracing::debug!(value = raw, "ignoring unknown theme request"),
        }
    }

    /// Fires every phase whose deadline has passed. Returns true if the
    /// selection changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        loop {
            match self.phase {
                TransitionPhase::Entering { target, apply_at } if now >= apply_at => {
                    self.current = target;
                    self.persist();
                    self.phase = TransitionPhase::Settling {
                        settle_at: apply_at + SETTLE_DELAY,
                    };
                    self.notify();
                    changed = true;
                }
                TransitionPhase::Settling { settle_at } if now >= settle_at => {
                    self.phase = TransitionPhase::Idle;
                    tracing::info!(theme = %self.current, "theme transition settled");
                    self.notify();
                    changed = true;
                }
                _ => return changed,
            }
        }
    }

    /// When the next scheduled phase is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            TransitionPhase::Idle => None,
            TransitionPhase::Entering { apply_at, .. } => Some(apply_at),
            TransitionPhase::Settling { settle_at } => Some(settle_at),
        }
    }

    /// Registers an observer. Dropping the receiver unsubscribes it.
    pub fn subscribe(&mut self) -> Receiver<ThemeSelection> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn into_preferences(self) -> P {
        self.preferences
    }

    fn persist(&mut self) {
        if let Err(e) = self.preferences.set(STORAGE_KEY, self.current.as_str()) {
            tracing::warn!(theme = %self.current, "failed to persist theme: {e}");
        }
    }

    fn notify(&mut self) {
        let selection = self.get_current();
        self.subscribers.retain(|tx| tx.send(selection).is_ok());
    }
}
