use super::types::{Conflict, SlotAssignment};

/// Scans a finished or edited schedule for back-to-back repeats.
///
/// For every slot after the first, every seated volunteer who also appears
/// anywhere in the previous slot is flagged. Pure and side-effect-free;
/// conflicts are reported, never auto-corrected.
pub fn find_conflicts(assignments: &[SlotAssignment]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    for slot_index in 1..assignments.len() {
        let previous = &assignments[slot_index - 1];
        let current = &assignments[slot_index];
        let is_multi = matches!(current, SlotAssignment::Multi(_));
        for (location_index, pair) in current.pairs().iter().enumerate() {
            for &volunteer_id in pair.iter().flatten() {
                if previous.contains(volunteer_id) {
                    conflicts.push(Conflict {
                        slot_index,
                        location_index: is_multi.then_some(location_index),
                        volunteer_id,
                    });
                }
            }
        }
    }
    conflicts
}
