//! Stable surrogate identifiers.
//!
//! Ids are handed out by `IdGen` when a record is created or loaded and stay
//! attached to it for the whole session, independently of its position in
//! the collection. They are never written to the store.

use std::fmt;

macro_rules! surrogate_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }
    };
}

surrogate_id!(VehicleId, "V");
surrogate_id!(EntryId, "E");
surrogate_id!(SavedDayId, "S");

/// Monotonically increasing counter, starts at 1.
#[derive(Debug, Clone, Default)]
pub struct IdGen {
    last: u64,
}

impl IdGen {
    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}
