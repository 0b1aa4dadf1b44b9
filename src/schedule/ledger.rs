use std::collections::HashMap;

use super::types::{SlotAssignment, VolunteerId};

/// Canonical unordered pair key: `(A,B)` and `(B,A)` collapse to one entry.
pub fn pair_key(a: VolunteerId, b: VolunteerId) -> (VolunteerId, VolunteerId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Per-run accounting used while a schedule is being built: how many shifts
/// each volunteer holds so far, and how often each unordered pair has already
/// worked together. Pair counts drive partner variety during generation and
/// are not part of the finished schedule.
#[derive(Debug, Clone)]
pub struct Ledger {
    shift_counts: HashMap<VolunteerId, u32>,
    pair_counts: HashMap<(VolunteerId, VolunteerId), u32>,
}

impl Ledger {
    /// A fresh ledger with every pool member at zero shifts.
    pub fn new(pool: &[VolunteerId]) -> Self {
        Ledger {
            shift_counts: pool.iter().map(|&id| (id, 0)).collect(),
            pair_counts: HashMap::new(),
        }
    }

    pub fn shifts(&self, id: VolunteerId) -> u32 {
        self.shift_counts.get(&id).copied().unwrap_or(0)
    }

    pub fn pairings(&self, a: VolunteerId, b: VolunteerId) -> u32 {
        self.pair_counts.get(&pair_key(a, b)).copied().unwrap_or(0)
    }

    pub fn record_shift(&mut self, id: VolunteerId) {
        *self.shift_counts.entry(id).or_insert(0) += 1;
    }

    pub fn record_pair(&mut self, a: VolunteerId, b: VolunteerId) {
        *self.pair_counts.entry(pair_key(a, b)).or_insert(0) += 1;
    }

    pub fn into_shift_counts(self) -> HashMap<VolunteerId, u32> {
        self.shift_counts
    }
}

/// True if the volunteer may take a seat in `slot_index` without working
/// back-to-back: either this is the first slot, or they hold no seat anywhere
/// in the previous slot. Pure over the table built so far; the assignment
/// shape decides whether one or several locations are scanned.
pub fn is_available(id: VolunteerId, slot_index: usize, assignments: &[SlotAssignment]) -> bool {
    if slot_index == 0 {
        return true;
    }
    match assignments.get(slot_index - 1) {
        Some(previous) => !previous.contains(id),
        None => true,
    }
}

/// True if the volunteer already holds a seat in the slot currently being
/// filled, at any location.
pub fn is_in_current_slot(id: VolunteerId, slot: &SlotAssignment) -> bool {
    slot.contains(id)
}
