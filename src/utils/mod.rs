pub mod timer;

/// Which side of the field the robot starts on. Routines are authored for
/// red and mirrored for blue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldSide {
    Red,
    Blue,
}

impl FieldSide {
    pub fn name(self) -> &'static str {
        match self {
            FieldSide::Red => "Red",
            FieldSide::Blue => "Blue",
        }
    }
}
