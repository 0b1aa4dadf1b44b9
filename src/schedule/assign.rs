use rand::seq::SliceRandom;
use rand::Rng;

use super::ledger::{is_available, is_in_current_slot, Ledger};
use super::types::{SlotAssignment, VolunteerId};

/// Weight of one prior pairing in the partner score. Dominates shift counts so
/// partner variety wins over workload when the two pull in different directions.
pub(crate) const PAIR_WEIGHT: u32 = 100;

/// Chance that randomize mode bypasses partner scoring entirely and picks a
/// uniform random partner instead.
pub(crate) const RANDOM_PARTNER_CHANCE: f64 = 0.4;

/// Pass-1 candidate ordering: stable sort ascending by shift count, so ties
/// keep roster order. In randomize mode the group sharing the minimum count is
/// shuffled first, which varies the anchor without touching the balance.
pub(crate) fn order_candidates<R: Rng>(
    candidates: &mut [VolunteerId],
    ledger: &Ledger,
    randomize: bool,
    rng: &mut R,
) {
    candidates.sort_by_key(|&id| ledger.shifts(id));
    if randomize && candidates.len() > 1 {
        let min_shifts = ledger.shifts(candidates[0]);
        let tie_end = candidates
            .iter()
            .position(|&id| ledger.shifts(id) > min_shifts)
            .unwrap_or(candidates.len());
        candidates[..tie_end].shuffle(rng);
    }
}

/// Pass-2 candidate ordering: shift count still decides, but in randomize mode
/// the list is pre-shuffled so equal counts land in random order.
pub(crate) fn order_relaxed<R: Rng>(
    candidates: &mut [VolunteerId],
    ledger: &Ledger,
    randomize: bool,
    rng: &mut R,
) {
    if randomize {
        candidates.shuffle(rng);
    }
    candidates.sort_by_key(|&id| ledger.shifts(id));
}

/// Picks the partner for `anchor` among the remaining candidates.
///
/// Score: prior pairings with the anchor, weighted heavily, plus the
/// candidate's own shift count; lowest wins. Ties keep the first candidate in
/// the already-sorted order. In randomize mode, scoring is bypassed with a
/// fixed probability in favor of a uniform random pick.
pub(crate) fn pick_partner<R: Rng>(
    anchor: VolunteerId,
    others: &[VolunteerId],
    ledger: &Ledger,
    randomize: bool,
    rng: &mut R,
) -> Option<VolunteerId> {
    if others.is_empty() {
        return None;
    }
    if randomize && rng.gen_bool(RANDOM_PARTNER_CHANCE) {
        return others.choose(rng).copied();
    }

    let mut best = None;
    let mut best_score = u32::MAX;
    for &candidate in others {
        let score = ledger.pairings(anchor, candidate) * PAIR_WEIGHT + ledger.shifts(candidate);
        if score < best_score {
            best_score = score;
            best = Some(candidate);
        }
    }
    best
}

/// Pass-2 relaxation tiers, tried in order until a seat is filled. Current-slot
/// uniqueness is enforced in every tier and is never relaxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Relaxation {
    /// Free this slot and not assigned in the previous slot.
    RestedAndFree,
    /// Free this slot; a back-to-back assignment is accepted as a last resort.
    FreeOnly,
}

pub(crate) const RELAXATION_ORDER: [Relaxation; 2] =
    [Relaxation::RestedAndFree, Relaxation::FreeOnly];

/// Pool members eligible for a seat in `slot_index` under the given tier.
pub(crate) fn tier_candidates(
    tier: Relaxation,
    pool: &[VolunteerId],
    slot_index: usize,
    assignments: &[SlotAssignment],
) -> Vec<VolunteerId> {
    pool.iter()
        .copied()
        .filter(|&id| !is_in_current_slot(id, &assignments[slot_index]))
        .filter(|&id| match tier {
            Relaxation::RestedAndFree => is_available(id, slot_index, assignments),
            Relaxation::FreeOnly => true,
        })
        .collect()
}

/// Fills any open seat of one (slot, location) pair, walking the relaxation
/// tiers. A seat that no tier can fill stays `None`; too small a pool is an
/// expected outcome, not an error.
pub(crate) fn fill_open_seats<R: Rng>(
    pool: &[VolunteerId],
    slot_index: usize,
    location_index: usize,
    assignments: &mut [SlotAssignment],
    ledger: &mut Ledger,
    randomize: bool,
    rng: &mut R,
) {
    for seat in 0..2 {
        if assignments[slot_index].pairs()[location_index][seat].is_some() {
            continue;
        }

        let mut chosen = None;
        for tier in RELAXATION_ORDER {
            let mut candidates = tier_candidates(tier, pool, slot_index, assignments);
            if candidates.is_empty() {
                continue;
            }
            order_relaxed(&mut candidates, ledger, randomize, rng);
            chosen = candidates.first().copied();
            break;
        }

        let Some(id) = chosen else {
            continue;
        };
        let pair = &mut assignments[slot_index].pairs_mut()[location_index];
        pair[seat] = Some(id);
        ledger.record_shift(id);
        if let [Some(a), Some(b)] = *pair {
            ledger.record_pair(a, b);
        }
    }
}
