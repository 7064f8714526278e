use std::time::Instant;

use tracing::{debug, trace};

use crate::constants::{FRAME_TIME, SHEET_COLUMNS};
use crate::direction::Facing;
use crate::sprite::frame::SheetCell;

use super::{Motion, StopPolicy};

/// One-shot notification fired when a session's stop condition fires.
///
/// Consuming the boxed closure is what makes the notification one-shot: once
/// it has run there is nothing left to call, so a completion can never fire
/// twice even if several ticks land on the terminal frame.
pub type CompletionHook = Box<dyn FnOnce()>;

/// The live instance of "an animation is currently playing".
struct Session {
    motion: Motion,
    policy: StopPolicy,
    started: Instant,
    /// Precomputed stop instant for [`StopPolicy::After`]; checked on every
    /// tick so it fires irrespective of the current cycle position.
    deadline: Option<Instant>,
    /// The frame index most recently made visible.
    last_frame: u32,
    /// Completed full cycles since the session started.
    cycles: u32,
    on_complete: Option<CompletionHook>,
}

enum SessionState {
    Idle,
    Running(Session),
}

/// What a tick decided to do, resolved before any state is touched.
enum Step {
    NoChange,
    Advance { frame: u32, wrapped: bool },
    Finish,
}

/// The primary animation scheduler for the base creature sprite.
///
/// Frame selection is time-based: each tick recomputes the frame index from
/// wall-clock elapsed time, so a stalled host loop skips frames visually
/// instead of slowing the animation down. At most one session exists at any
/// instant; `play` replaces the previous session synchronously, so a tick
/// can never observe (or draw for) a superseded motion.
pub struct AnimationController {
    state: SessionState,
    facing: Facing,
}

impl AnimationController {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            facing: Facing::default(),
        }
    }

    /// Starts a new session, superseding any in-flight one.
    ///
    /// The previous session's scheduling state and deadline are discarded
    /// before the new session is assigned (its completion hook does not
    /// fire). The new session starts at frame 0 with `started = now`.
    pub fn play(&mut self, motion: Motion, policy: StopPolicy, now: Instant, on_complete: CompletionHook) {
        self.stop();

        let deadline = match policy {
            StopPolicy::After(duration) => Some(now + duration),
            _ => None,
        };

        debug!(motion = motion.as_ref(), policy = ?policy, "Starting animation session");
        self.state = SessionState::Running(Session {
            motion,
            policy,
            started: now,
            deadline,
            last_frame: 0,
            cycles: 0,
            on_complete: Some(on_complete),
        });
    }

    /// Cancels the in-flight session, if any, without firing its completion
    /// hook. Used on supersession and on view teardown.
    pub fn stop(&mut self) {
        if let SessionState::Running(session) = std::mem::replace(&mut self.state, SessionState::Idle) {
            if let Some(facing) = session.motion.facing_hint() {
                self.facing = facing;
            }
            trace!(motion = session.motion.as_ref(), "Animation session cancelled");
        }
    }

    /// Advances the session to the frame that should be visible at `now`.
    ///
    /// Cycle boundaries are detected by comparing consecutive computed frame
    /// indices (a computed index below the previous one means the cycle
    /// wrapped since the last tick), never by a raw modulo of elapsed time,
    /// which would double-count wraps when ticks are delayed. Stop
    /// conditions for `Once` and `Loops` are evaluated exactly at those
    /// boundaries; an `After` deadline is checked first and fires mid-cycle.
    pub fn tick(&mut self, now: Instant) {
        let step = match &self.state {
            SessionState::Idle => Step::NoChange,
            SessionState::Running(session) => {
                if session.deadline.is_some_and(|deadline| now >= deadline) {
                    Step::Finish
                } else {
                    let elapsed = now.saturating_duration_since(session.started);
                    let frame = if session.motion.is_idle() {
                        0
                    } else {
                        (elapsed.as_millis() / FRAME_TIME.as_millis()) as u32 % SHEET_COLUMNS
                    };

                    if frame == session.last_frame {
                        Step::NoChange
                    } else {
                        Step::Advance {
                            frame,
                            wrapped: frame < session.last_frame,
                        }
                    }
                }
            }
        };

        match step {
            Step::NoChange => {}
            Step::Finish => self.finish(),
            Step::Advance { frame, wrapped } => {
                let SessionState::Running(session) = &mut self.state else {
                    return;
                };

                if wrapped {
                    session.cycles += 1;
                    let done = match session.policy {
                        StopPolicy::Once => session.cycles >= 1,
                        StopPolicy::Loops(count) => session.cycles >= count,
                        StopPolicy::Perpetual | StopPolicy::After(_) => false,
                    };
                    if done {
                        self.finish();
                        return;
                    }
                }

                session.last_frame = frame;
            }
        }
    }

    /// The cell that should be visible right now.
    ///
    /// While no session runs this re-derives frame 0 of the facing
    /// appropriate row, so idle rendering follows the direction memory.
    pub fn current_cell(&self) -> SheetCell {
        match &self.state {
            SessionState::Idle => SheetCell::new(Motion::Idle.row(self.facing), 0),
            SessionState::Running(session) => {
                let col = if session.motion.is_idle() { 0 } else { session.last_frame };
                SheetCell::new(session.motion.row(self.facing), col)
            }
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running(_))
    }

    /// The motion of the in-flight session, if any.
    pub fn motion(&self) -> Option<Motion> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Running(session) => Some(session.motion),
        }
    }

    /// Completed full cycles of the in-flight session.
    pub fn cycles(&self) -> u32 {
        match &self.state {
            SessionState::Idle => 0,
            SessionState::Running(session) => session.cycles,
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Tears down the session because its stop condition fired, then invokes
    /// the completion hook exactly once.
    fn finish(&mut self) {
        let SessionState::Running(session) = std::mem::replace(&mut self.state, SessionState::Idle) else {
            return;
        };

        if let Some(facing) = session.motion.facing_hint() {
            self.facing = facing;
        }

        debug!(
            motion = session.motion.as_ref(),
            cycles = session.cycles,
            "Animation session complete"
        );

        if let Some(hook) = session.on_complete {
            hook();
        }
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}
