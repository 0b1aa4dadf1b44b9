pub mod assign;
pub mod conflicts;
pub mod edits;
pub mod ledger;
pub mod multi;
pub mod single;
pub mod slot_utils;
pub mod types;

pub use conflicts::find_conflicts;
pub use edits::{apply_edit, recompute_shift_counts};
pub use ledger::{is_available, is_in_current_slot, Ledger};
pub use multi::assign_multi_location;
pub use single::assign_single_location;
pub use slot_utils::generate_time_slots;
pub use types::{
    Conflict, Edit, EditError, EditOutcome, LocationMode, PairSlots, Schedule, SlotAssignment,
    TimeSlot, TimeWindow, Volunteer, VolunteerId,
};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a complete schedule for the given roster, window, and mode.
///
/// Pure: the inputs are not mutated, there is no hidden state, and with
/// `randomize` off the RNG is never consulted, so identical inputs produce
/// identical schedules. An empty roster or an unusable window degrades to an
/// empty grid rather than an error.
pub fn create_schedule<R: Rng>(
    volunteers: &[Volunteer],
    window: &TimeWindow,
    mode: &LocationMode,
    randomize: bool,
    rng: &mut R,
) -> Schedule {
    let slots = generate_time_slots(window);
    let pool: Vec<VolunteerId> = volunteers.iter().map(|v| v.id).collect();

    let (location_names, (assignments, shift_counts)) = match mode {
        LocationMode::Single => (
            Vec::new(),
            assign_single_location(&pool, slots.len(), randomize, rng),
        ),
        LocationMode::Multiple(names) => (
            names.clone(),
            assign_multi_location(&pool, slots.len(), names.len(), randomize, rng),
        ),
    };

    Schedule {
        volunteers: volunteers.to_vec(),
        location_names,
        slots,
        assignments,
        shift_counts,
    }
}

/// RNG for a generation run: seeded when reproducibility is wanted, fresh
/// entropy otherwise. Seeding is always this explicit caller-level choice.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
