use chrono::{NaiveTime, Timelike};

use super::types::{TimeSlot, TimeWindow};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parses a "HH:MM" time string to minutes since midnight.
pub fn parse_time_to_minutes(time_str: &str) -> Option<u32> {
    let time = NaiveTime::parse_from_str(time_str.trim(), "%H:%M").ok()?;
    Some(time.hour() * 60 + time.minute())
}

/// Formats minutes since midnight as a 24-hour "HH:MM" string.
pub fn minutes_to_time_string(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats minutes since midnight as a 12-hour clock string, e.g. "4:00PM".
pub fn minutes_to_12h(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    let hours = minutes / 60;
    let mins = minutes % 60;
    let period = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02}{}", display_hours, mins, period)
}

/// Generates the ordered shift slots covering the window.
///
/// Slots run `[start, start+interval), [start+interval, start+2*interval), ...`
/// and stop at the last slot that ends at or before the window's end. An end
/// time at or before the start is treated as wrapping past midnight. Malformed
/// times or a zero interval yield an empty list; rejecting bad input up front
/// is the caller's job, the generator fails soft.
pub fn generate_time_slots(window: &TimeWindow) -> Vec<TimeSlot> {
    let mut slots = Vec::new();

    if window.interval_minutes == 0 {
        return slots;
    }
    let (start_minutes, end_minutes) = match (
        parse_time_to_minutes(&window.start_time),
        parse_time_to_minutes(&window.end_time),
    ) {
        (Some(start), Some(end)) => (start, end),
        _ => return slots,
    };

    // Wrap past midnight when the end doesn't follow the start numerically.
    let end_minutes = if end_minutes <= start_minutes {
        end_minutes + MINUTES_PER_DAY
    } else {
        end_minutes
    };

    let mut current = start_minutes;
    while current + window.interval_minutes <= end_minutes {
        let next = current + window.interval_minutes;
        let start_12h = minutes_to_12h(current);
        let end_12h = minutes_to_12h(next);
        slots.push(TimeSlot {
            start: minutes_to_time_string(current),
            end: minutes_to_time_string(next),
            display: format!("{} - {}", start_12h, end_12h),
            compact: format!("{}-{}", start_12h, end_12h),
        });
        current = next;
    }

    slots
}
