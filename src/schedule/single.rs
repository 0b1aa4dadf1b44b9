use std::collections::HashMap;

use rand::Rng;

use super::assign::{fill_open_seats, order_candidates, pick_partner};
use super::ledger::{is_available, Ledger};
use super::types::{SlotAssignment, VolunteerId};

/// Fills one volunteer pair per slot for a single posting location.
///
/// Pass 1 only considers volunteers who are free of a back-to-back repeat and
/// skips any slot with fewer than two of them; pass 2 fills whatever is left
/// through the relaxation tiers. Returns the assignment grid plus the final
/// per-volunteer shift counts.
pub fn assign_single_location<R: Rng>(
    pool: &[VolunteerId],
    num_slots: usize,
    randomize: bool,
    rng: &mut R,
) -> (Vec<SlotAssignment>, HashMap<VolunteerId, u32>) {
    let mut assignments = vec![SlotAssignment::Single([None, None]); num_slots];
    let mut ledger = Ledger::new(pool);

    // Pass 1: constrained, variety-optimized.
    for slot_index in 0..num_slots {
        let mut candidates: Vec<VolunteerId> = pool
            .iter()
            .copied()
            .filter(|&id| is_available(id, slot_index, &assignments))
            .collect();
        if candidates.len() < 2 {
            continue; // deferred to pass 2
        }

        order_candidates(&mut candidates, &ledger, randomize, rng);
        let anchor = candidates[0];
        let Some(partner) = pick_partner(anchor, &candidates[1..], &ledger, randomize, rng) else {
            continue;
        };

        assignments[slot_index] = SlotAssignment::Single([Some(anchor), Some(partner)]);
        ledger.record_shift(anchor);
        ledger.record_shift(partner);
        ledger.record_pair(anchor, partner);
    }

    // Pass 2: relaxed fill of whatever pass 1 left open.
    for slot_index in 0..num_slots {
        fill_open_seats(pool, slot_index, 0, &mut assignments, &mut ledger, randomize, rng);
    }

    (assignments, ledger.into_shift_counts())
}
