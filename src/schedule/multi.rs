use std::collections::HashMap;

use rand::Rng;

use super::assign::{fill_open_seats, order_candidates, pick_partner};
use super::ledger::{is_available, is_in_current_slot, Ledger};
use super::types::{SlotAssignment, VolunteerId};

/// Fills one volunteer pair per (slot, location), in location order within
/// each slot.
///
/// Same two-pass structure as the single-location engine, with one extra
/// constraint everywhere: a volunteer never covers two locations in the same
/// slot. That constraint also holds through every pass-2 relaxation tier.
pub fn assign_multi_location<R: Rng>(
    pool: &[VolunteerId],
    num_slots: usize,
    num_locations: usize,
    randomize: bool,
    rng: &mut R,
) -> (Vec<SlotAssignment>, HashMap<VolunteerId, u32>) {
    let mut assignments =
        vec![SlotAssignment::Multi(vec![[None, None]; num_locations]); num_slots];
    let mut ledger = Ledger::new(pool);

    // Pass 1: constrained, variety-optimized.
    for slot_index in 0..num_slots {
        for location_index in 0..num_locations {
            let mut candidates: Vec<VolunteerId> = pool
                .iter()
                .copied()
                .filter(|&id| {
                    is_available(id, slot_index, &assignments)
                        && !is_in_current_slot(id, &assignments[slot_index])
                })
                .collect();
            if candidates.len() < 2 {
                continue; // deferred to pass 2
            }

            order_candidates(&mut candidates, &ledger, randomize, rng);
            let anchor = candidates[0];
            let Some(partner) = pick_partner(anchor, &candidates[1..], &ledger, randomize, rng)
            else {
                continue;
            };

            assignments[slot_index].pairs_mut()[location_index] = [Some(anchor), Some(partner)];
            ledger.record_shift(anchor);
            ledger.record_shift(partner);
            ledger.record_pair(anchor, partner);
        }
    }

    // Pass 2: relaxed fill, location by location.
    for slot_index in 0..num_slots {
        for location_index in 0..num_locations {
            fill_open_seats(
                pool,
                slot_index,
                location_index,
                &mut assignments,
                &mut ledger,
                randomize,
                rng,
            );
        }
    }

    (assignments, ledger.into_shift_counts())
}
