use std::collections::HashMap;

use super::conflicts::find_conflicts;
use super::types::{Edit, EditError, EditOutcome, Schedule, SlotAssignment, Volunteer, VolunteerId};

/// Tallies shift counts from scratch over the full assignment grid. Every
/// roster member gets an entry, zero included. This is the only way shift
/// counts are ever produced after an edit; incremental adjustment is not done.
pub fn recompute_shift_counts(
    volunteers: &[Volunteer],
    assignments: &[SlotAssignment],
) -> HashMap<VolunteerId, u32> {
    let mut counts: HashMap<VolunteerId, u32> =
        volunteers.iter().map(|v| (v.id, 0)).collect();
    for slot in assignments {
        for pair in slot.pairs() {
            for &id in pair.iter().flatten() {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Validates and applies a single-cell substitution.
///
/// Rejection leaves the input schedule untouched (the function never mutates
/// it). Acceptance returns a new schedule with the cell rewritten, shift
/// counts recomputed over the whole grid, and conflicts re-scanned, so the
/// caller observes either the old state or the fully settled new one.
pub fn apply_edit(schedule: &Schedule, edit: &Edit) -> Result<EditOutcome, EditError> {
    let slot = schedule
        .assignments
        .get(edit.slot_index)
        .ok_or(EditError::SlotOutOfRange {
            slot_index: edit.slot_index,
        })?;
    if edit.position >= 2 {
        return Err(EditError::PositionOutOfRange {
            position: edit.position,
        });
    }
    let name = schedule
        .name_of(edit.volunteer_id)
        .ok_or(EditError::UnknownVolunteer(edit.volunteer_id))?
        .to_string();

    let (location_index, is_multi) = match slot {
        SlotAssignment::Single(_) => (0, false),
        SlotAssignment::Multi(pairs) => {
            let location_index = edit.location_index.unwrap_or(0);
            if location_index >= pairs.len() {
                return Err(EditError::LocationOutOfRange { location_index });
            }
            (location_index, true)
        }
    };

    let pairs = slot.pairs();
    if pairs[location_index][1 - edit.position] == Some(edit.volunteer_id) {
        return Err(EditError::AlreadyInShift {
            slot_index: edit.slot_index,
            location_index: is_multi.then_some(location_index),
            name,
        });
    }
    if is_multi {
        let elsewhere = pairs.iter().enumerate().any(|(i, pair)| {
            i != location_index && pair.iter().any(|seat| *seat == Some(edit.volunteer_id))
        });
        if elsewhere {
            return Err(EditError::AlreadyInSlot {
                slot_index: edit.slot_index,
                location_index,
                name,
            });
        }
    }

    let mut updated = schedule.clone();
    updated.assignments[edit.slot_index].pairs_mut()[location_index][edit.position] =
        Some(edit.volunteer_id);
    updated.shift_counts = recompute_shift_counts(&updated.volunteers, &updated.assignments);
    let conflicts = find_conflicts(&updated.assignments);

    Ok(EditOutcome {
        schedule: updated,
        conflicts,
    })
}
