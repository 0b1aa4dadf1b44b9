use serde::{Deserialize, Serialize};

use crate::schedule::slot_utils::parse_time_to_minutes;

/// Generation request from the frontend or CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Display names in roster order; blanks are tolerated and filtered out.
    pub volunteers: Vec<String>,
    /// "HH:MM", 24-hour
    pub start_time: String,
    /// "HH:MM", 24-hour
    pub end_time: String,
    pub interval_minutes: u32,
    #[serde(default)]
    pub multiple_locations: bool,
    #[serde(default)]
    pub location_names: Vec<String>,
    #[serde(default)]
    pub randomize: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Validates a generation request before the engine is invoked.
///
/// The engine itself fails soft on bad input; these are the caller-side
/// preconditions it is allowed to assume.
pub fn validate_request(req: &GenerateRequest) -> Result<(), String> {
    let named: Vec<&str> = req
        .volunteers
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect();

    let minimum = if req.multiple_locations { 4 } else { 2 };
    if named.len() < minimum {
        return Err(format!(
            "At least {} volunteers are required{}",
            minimum,
            if req.multiple_locations {
                " for multiple locations"
            } else {
                ""
            }
        ));
    }

    if parse_time_to_minutes(&req.start_time).is_none() {
        return Err(format!("Invalid start time: {}", req.start_time));
    }
    if parse_time_to_minutes(&req.end_time).is_none() {
        return Err(format!("Invalid end time: {}", req.end_time));
    }
    if req.interval_minutes == 0 {
        return Err("Shift interval must be greater than zero".to_string());
    }

    if req.multiple_locations {
        if req.location_names.is_empty() {
            return Err("Location names are required for multiple locations".to_string());
        }
        if req.location_names.iter().any(|name| name.trim().is_empty()) {
            return Err("Location names must not be blank".to_string());
        }
    } else if !req.location_names.is_empty() {
        return Err("Location names are only valid with multiple locations".to_string());
    }

    Ok(())
}
