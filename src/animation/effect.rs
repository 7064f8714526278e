use std::time::Instant;

use strum_macros::{AsRefStr, EnumIter};
use tracing::{debug, trace};

use crate::constants::{EFFECT_FRAMES, EFFECT_FRAME_TIME};
use crate::sprite::frame::SheetCell;

use super::CompletionHook;

/// The closed set of status effects the overlay can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Effect {
    HealSmall,
    HealLarge,
    HealFull,
    Revive,
    AttackBoost,
    DefenseBoost,
    SpeedBoost,
}

/// The live instance of an effect clip.
struct EffectSession {
    effect: Effect,
    started: Instant,
    frame: u32,
    /// Set when the final frame is first reached; the hook fires under this
    /// guard so repeated ticks on the terminal frame cannot re-fire it.
    completed: bool,
    on_complete: Option<CompletionHook>,
}

/// The overlay effect scheduler.
///
/// Structurally a smaller sibling of the primary controller with exactly one
/// stop policy: play the fixed 8-frame clip once, clamp on the final frame
/// (never wrap), notify, then disappear. It runs on its own clock against
/// its own surface; the primary animation can neither interrupt it nor be
/// interrupted by it.
pub struct EffectController {
    session: Option<EffectSession>,
}

impl EffectController {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Requests an effect.
    ///
    /// Returns `false` when another effect is still active: concurrent
    /// requests are dropped, not queued, so a playing effect always runs to
    /// completion. A dropped request leaves no trace on the active session.
    pub fn show(&mut self, effect: Effect, now: Instant, on_complete: CompletionHook) -> bool {
        if self.session.is_some() {
            trace!(effect = effect.as_ref(), "Effect request dropped while another is active");
            return false;
        }

        debug!(effect = effect.as_ref(), "Starting effect session");
        self.session = Some(EffectSession {
            effect,
            started: now,
            frame: 0,
            completed: false,
            on_complete: Some(on_complete),
        });
        true
    }

    /// Advances the effect to the frame that should be visible at `now`.
    ///
    /// The computed index clamps on the final frame rather than wrapping.
    /// Reaching it fires the completion hook exactly once; once the clip's
    /// full duration has elapsed the session is destroyed so the overlay
    /// disappears and a new request can be accepted.
    pub fn tick(&mut self, now: Instant) {
        let Some(session) = &mut self.session else {
            return;
        };

        let elapsed = now.saturating_duration_since(session.started);
        let raw = (elapsed.as_millis() / EFFECT_FRAME_TIME.as_millis()) as u32;

        if raw < EFFECT_FRAMES - 1 {
            session.frame = raw;
            return;
        }

        session.frame = EFFECT_FRAMES - 1;
        if !session.completed {
            session.completed = true;
            debug!(effect = session.effect.as_ref(), "Effect complete");
            if let Some(hook) = session.on_complete.take() {
                hook();
            }
        }

        if raw >= EFFECT_FRAMES {
            self.session = None;
        }
    }

    /// The effect currently playing, if any.
    pub fn active(&self) -> Option<Effect> {
        self.session.as_ref().map(|session| session.effect)
    }

    /// The overlay cell that should be visible right now, or `None` while no
    /// effect is active (blank overlay).
    pub fn current_cell(&self) -> Option<SheetCell> {
        self.session.as_ref().map(|session| SheetCell::new(0, session.frame))
    }

    /// Tears down the in-flight effect without firing its hook. Used on view
    /// teardown only; requests never cancel a running effect.
    pub fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            trace!(effect = session.effect.as_ref(), "Effect session cancelled");
        }
    }
}

impl Default for EffectController {
    fn default() -> Self {
        Self::new()
    }
}
