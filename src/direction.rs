use strum_macros::AsRefStr;

/// The last horizontal heading of the creature.
///
/// Mutated only when a horizontal walk session ends; read only by idle
/// rendering, so an idle creature keeps looking the way it last walked
/// instead of snapping back to a default pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Both headings, for iteration in table-driven checks.
    pub const BOTH: [Facing; 2] = [Facing::Left, Facing::Right];

    /// Returns the opposite heading. Constant time.
    pub const fn opposite(self) -> Facing {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}
