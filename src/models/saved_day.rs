use super::ids::SavedDayId;

/// Snapshot of the all-vehicle aggregate for one date.
/// Never recomputed after it has been taken.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedDay {
    pub id: SavedDayId,
    pub date: String,
    pub total_hours: f64,
}
