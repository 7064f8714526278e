use strum_macros::{AsRefStr, EnumIter};

use crate::direction::Facing;

/// The closed set of motions a creature sheet can play.
///
/// Rows 0-5 of the sheet hold the four walks and the two attacks; every
/// other motion is a display-level alias onto one of those rows, so adding a
/// motion here is a compile-time-checked change to [`Motion::row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Motion {
    WalkDown,
    WalkLeft,
    WalkRight,
    WalkUp,
    AttackPrimary,
    AttackSecondary,
    Idle,
    IdleLeft,
    IdleRight,
    Sleep,
    Eat,
    Train,
    Play,
    Happy,
}

impl Motion {
    /// The sheet row this motion renders from.
    ///
    /// `Idle` falls back to the horizontal walk row matching the remembered
    /// facing, so an idle creature keeps its last heading.
    pub const fn row(self, facing: Facing) -> u32 {
        match self {
            Motion::WalkDown | Motion::Sleep | Motion::Play => 0,
            Motion::WalkLeft | Motion::IdleLeft => 1,
            Motion::WalkRight | Motion::IdleRight => 2,
            Motion::WalkUp | Motion::Happy => 3,
            Motion::AttackPrimary | Motion::Eat => 4,
            Motion::AttackSecondary | Motion::Train => 5,
            Motion::Idle => match facing {
                Facing::Left => 1,
                Facing::Right => 2,
            },
        }
    }

    /// Whether this motion is idle-family. Idle motions always render column
    /// 0 regardless of elapsed time.
    pub const fn is_idle(self) -> bool {
        matches!(self, Motion::Idle | Motion::IdleLeft | Motion::IdleRight)
    }

    /// The horizontal heading this motion leaves behind in the direction
    /// memory, if any.
    pub const fn facing_hint(self) -> Option<Facing> {
        match self {
            Motion::WalkLeft => Some(Facing::Left),
            Motion::WalkRight => Some(Facing::Right),
            _ => None,
        }
    }
}
