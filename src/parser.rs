use std::path::Path;

use csv::ReaderBuilder;

use crate::schedule::{Volunteer, VolunteerId};

/// Builds a roster from display names, in order. Blank entries are filtered
/// out here so the engine never sees them; ids are assigned sequentially and
/// stay stable for the lifetime of the roster, so duplicate display names
/// remain distinct volunteers.
pub fn roster_from_names<S: AsRef<str>>(names: &[S]) -> Vec<Volunteer> {
    names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .enumerate()
        .map(|(index, name)| Volunteer {
            id: VolunteerId(index as u32),
            name: name.to_string(),
        })
        .collect()
}

/// Loads a roster from a CSV file: one volunteer name in the first column of
/// each record, header-less. Blank rows are skipped.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<Volunteer>, Box<dyn std::error::Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut names = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(field) = record.get(0) {
            names.push(field.to_string());
        }
    }

    Ok(roster_from_names(&names))
}
