use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable internal identifier for a volunteer.
///
/// Assigned once when the roster is built and never derived from the display
/// name, so two volunteers sharing a name stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VolunteerId(pub u32);

/// A roster entry: stable id plus display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: VolunteerId,
    pub name: String,
}

/// Caller-supplied time window for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeWindow {
    /// "HH:MM", 24-hour
    pub start_time: String,
    /// "HH:MM", 24-hour; at or before `start_time` means the window wraps past midnight
    pub end_time: String,
    pub interval_minutes: u32,
}

/// One shift window. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// "HH:MM", 24-hour
    pub start: String,
    /// "HH:MM", 24-hour
    pub end: String,
    /// e.g. "4:00PM - 4:30PM"
    pub display: String,
    /// e.g. "4:00PM-4:30PM"
    pub compact: String,
}

/// The two seats to fill for one location in one slot.
/// An unfilled seat is an explicit `None`, never dropped.
pub type PairSlots = [Option<VolunteerId>; 2];

/// Assignment for one slot: a flat pair for a single posting location, or one
/// pair per named location. Queries dispatch on this shape rather than on a
/// mode flag carried elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotAssignment {
    Single(PairSlots),
    Multi(Vec<PairSlots>),
}

impl SlotAssignment {
    /// All location pairs in this slot (a single-location slot is one pair).
    pub fn pairs(&self) -> &[PairSlots] {
        match self {
            SlotAssignment::Single(pair) => std::slice::from_ref(pair),
            SlotAssignment::Multi(pairs) => pairs,
        }
    }

    pub fn pairs_mut(&mut self) -> &mut [PairSlots] {
        match self {
            SlotAssignment::Single(pair) => std::slice::from_mut(pair),
            SlotAssignment::Multi(pairs) => pairs,
        }
    }

    /// True if the volunteer holds any seat in this slot, across all locations.
    pub fn contains(&self, id: VolunteerId) -> bool {
        self.pairs()
            .iter()
            .any(|pair| pair.iter().any(|seat| *seat == Some(id)))
    }
}

/// Posting-location mode for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LocationMode {
    Single,
    Multiple(Vec<String>),
}

/// A finished (or manually edited) schedule.
///
/// `slots` and `assignments` are parallel: `assignments[i]` covers the time
/// window `slots[i]`. `shift_counts` always reflects the committed grid
/// exactly; it is recomputed in full after every accepted edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub volunteers: Vec<Volunteer>,
    /// Empty in single-location mode.
    pub location_names: Vec<String>,
    pub slots: Vec<TimeSlot>,
    pub assignments: Vec<SlotAssignment>,
    pub shift_counts: HashMap<VolunteerId, u32>,
}

impl Schedule {
    pub fn name_of(&self, id: VolunteerId) -> Option<&str> {
        self.volunteers
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.name.as_str())
    }
}

/// A back-to-back repeat: the volunteer holds a seat in `slot_index` and also
/// appears somewhere in the immediately preceding slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub slot_index: usize,
    /// `None` for a single-location schedule.
    pub location_index: Option<usize>,
    pub volunteer_id: VolunteerId,
}

/// A proposed single-cell substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edit {
    pub slot_index: usize,
    /// Required for multi-location schedules, ignored for single.
    pub location_index: Option<usize>,
    /// 0 or 1
    pub position: usize,
    pub volunteer_id: VolunteerId,
}

/// Structured rejection from the manual-edit guard. A rejected edit leaves the
/// schedule untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("{name} is already in this shift")]
    AlreadyInShift {
        slot_index: usize,
        location_index: Option<usize>,
        name: String,
    },
    #[error("{name} is already assigned elsewhere this slot")]
    AlreadyInSlot {
        slot_index: usize,
        location_index: usize,
        name: String,
    },
    #[error("slot index {slot_index} is out of range")]
    SlotOutOfRange { slot_index: usize },
    #[error("location index {location_index} is out of range")]
    LocationOutOfRange { location_index: usize },
    #[error("position {position} is out of range")]
    PositionOutOfRange { position: usize },
    #[error("unknown volunteer id {0:?}")]
    UnknownVolunteer(VolunteerId),
}

/// Result of an accepted edit: the new schedule plus its re-scanned conflicts.
#[derive(Debug, Clone)]
pub struct EditOutcome {
    pub schedule: Schedule,
    pub conflicts: Vec<Conflict>,
}
