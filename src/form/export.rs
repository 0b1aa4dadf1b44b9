use csv::WriterBuilder;

use crate::schedule::Schedule;

/// Serializes a schedule to CSV: one row per slot (single location) or per
/// slot/location, with explicit empty cells for unfilled seats.
pub fn export_schedule_to_csv(schedule: &Schedule) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(["Start", "End", "Location", "Volunteer 1", "Volunteer 2"])?;

    for (slot_index, slot) in schedule.slots.iter().enumerate() {
        let assignment = &schedule.assignments[slot_index];
        for (location_index, pair) in assignment.pairs().iter().enumerate() {
            let location = schedule
                .location_names
                .get(location_index)
                .map(String::as_str)
                .unwrap_or("");
            let seat0 = pair[0].and_then(|id| schedule.name_of(id)).unwrap_or("");
            let seat1 = pair[1].and_then(|id| schedule.name_of(id)).unwrap_or("");
            writer.write_record([slot.start.as_str(), slot.end.as_str(), location, seat0, seat1])?;
        }
    }

    Ok(writer.into_inner()?)
}
