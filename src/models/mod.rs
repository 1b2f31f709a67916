pub mod identifier;
pub mod ids;
pub mod saved_day;
pub mod vehicle;

pub use identifier::{Identifier, IdentifierKind};
pub use ids::{EntryId, SavedDayId, VehicleId};
pub use saved_day::SavedDay;
pub use vehicle::{HourEntry, VehicleRecord};
