use std::fs::File;
use std::io::Write;

use crate::schedule::{Conflict, PairSlots, Schedule, VolunteerId};

/// Renders one pair of seats as "Ann & Ben", with "[unassigned]" for an open seat.
pub fn format_pair(schedule: &Schedule, pair: &PairSlots) -> String {
    let seat = |id: Option<VolunteerId>| -> String {
        id.and_then(|id| schedule.name_of(id))
            .unwrap_or("[unassigned]")
            .to_string()
    };
    format!("{} & {}", seat(pair[0]), seat(pair[1]))
}

fn conflict_marker(conflicts: &[Conflict], slot_index: usize, location_index: Option<usize>) -> &'static str {
    let hit = conflicts
        .iter()
        .any(|c| c.slot_index == slot_index && c.location_index == location_index);
    if hit {
        "  <- back-to-back"
    } else {
        ""
    }
}

/// Prints a schedule in a readable format, one line per slot (or per
/// slot/location), with back-to-back conflicts marked inline.
pub fn print_schedule(schedule: &Schedule, conflicts: &[Conflict]) {
    println!("\n=== Shift Schedule ===");
    for (slot_index, slot) in schedule.slots.iter().enumerate() {
        let assignment = &schedule.assignments[slot_index];
        if schedule.location_names.is_empty() {
            let pair = &assignment.pairs()[0];
            println!(
                "  {} -> {}{}",
                slot.display,
                format_pair(schedule, pair),
                conflict_marker(conflicts, slot_index, None)
            );
        } else {
            println!("  {}", slot.display);
            for (location_index, pair) in assignment.pairs().iter().enumerate() {
                println!(
                    "    {} -> {}{}",
                    schedule.location_names[location_index],
                    format_pair(schedule, pair),
                    conflict_marker(conflicts, slot_index, Some(location_index))
                );
            }
        }
    }

    println!("\nShift counts:");
    let mut volunteers: Vec<_> = schedule.volunteers.iter().collect();
    volunteers.sort_by_key(|v| v.id);
    for volunteer in volunteers {
        let count = schedule.shift_counts.get(&volunteer.id).copied().unwrap_or(0);
        println!("  {}: {}", volunteer.name, count);
    }

    if !conflicts.is_empty() {
        println!("\n⚠️  {} back-to-back conflict(s) could not be avoided", conflicts.len());
    }
}

/// Writes a schedule to a plain-text file, one slot per line.
pub fn write_schedule_to_file(
    schedule: &Schedule,
    conflicts: &[Conflict],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;

    writeln!(file, "** Shift Schedule **")?;
    for (slot_index, slot) in schedule.slots.iter().enumerate() {
        let assignment = &schedule.assignments[slot_index];
        if schedule.location_names.is_empty() {
            writeln!(
                file,
                "{} {}",
                slot.compact,
                format_pair(schedule, &assignment.pairs()[0])
            )?;
        } else {
            for (location_index, pair) in assignment.pairs().iter().enumerate() {
                writeln!(
                    file,
                    "{} [{}] {}",
                    slot.compact,
                    schedule.location_names[location_index],
                    format_pair(schedule, pair)
                )?;
            }
        }
    }
    if !conflicts.is_empty() {
        writeln!(file, "({} back-to-back conflict(s))", conflicts.len())?;
    }

    Ok(())
}
