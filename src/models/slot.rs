use serde::{Serialize, Serializer};
use std::fmt;

/// One hour-aligned bucket on the studio booking grid.
/// Compared as a plain hour number, formatted as a zero-padded "HH:00"
/// label at the boundary. The studio does not book half-hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u32);

impl TimeSlot {
    /// Build a slot from a raw hour value.
    ///
    /// No range check here: the slot generator is allowed to walk past the
    /// end of the grid (e.g. 21:00 + 3h reaches hour 24) and the closing-time
    /// rule rejects those sequences afterwards. Hour validation for user
    /// input lives in [`crate::core::slots::normalize_time`].
    pub fn new(hour: u32) -> Self {
        Self(hour)
    }

    pub fn hour(&self) -> u32 {
        self.0
    }

    /// "HH:00" label used in CLI output, JSON payloads and the database.
    pub fn label(&self) -> String {
        format!("{:02}:00", self.0)
    }

    pub fn next(&self) -> TimeSlot {
        TimeSlot(self.0 + 1)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}
