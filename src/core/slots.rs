//! Slot grid primitives: time normalization and slot-sequence generation.
//! The business grid is hourly only, so all string parsing stops here and
//! the detector downstream works on plain slot values.

use crate::models::slot::TimeSlot;

/// First bookable hour of the day.
pub const OPENING_HOUR: u32 = 8;

/// Hour the studio closes. No occupied slot may include or extend past it.
pub const CLOSING_HOUR: u32 = 22;

/// Normalize a textual time into its top-of-hour slot.
///
/// Accepts "H", "HH:MM" or "HH:MM:SS". Minutes and seconds are truncated,
/// never rounded. Returns `None` when the string does not describe an hour
/// between 0 and 23.
pub fn normalize_time(raw: &str) -> Option<TimeSlot> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let mut parts = raw.split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;

    // trailing components must still be numeric, but their value is dropped
    for part in parts {
        let _: u32 = part.trim().parse().ok()?;
    }

    if hour > 23 {
        return None;
    }

    Some(TimeSlot::new(hour))
}

/// Parse a duration given either as a bare hour count ("2") or with a
/// trailing unit suffix ("2h"). Missing or empty input defaults to 1 hour.
///
/// Non-positive values parse successfully on purpose: the availability
/// rules reject them with an explicit "invalid duration", they are never
/// silently clamped here. Returns `None` for input that does not parse
/// to an integer at all.
pub fn parse_duration(raw: Option<&str>) -> Option<i64> {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return Some(1),
    };

    let digits = raw
        .strip_suffix('h')
        .or_else(|| raw.strip_suffix('H'))
        .unwrap_or(raw);

    digits.trim().parse::<i64>().ok()
}

/// Expand a (start, duration) pair into the ordered sequence of occupied
/// slots: exactly `duration_hours` entries, each one hour after the
/// previous, beginning at `start`. Empty for a non-positive duration.
///
/// The sequence is raw slot math and is NOT cut off at the closing
/// boundary — the closing-time rule is a separate business check owned by
/// the availability resolver, which keeps the grid reusable if opening
/// hours ever change.
pub fn generate_slots(start: TimeSlot, duration_hours: i64) -> Vec<TimeSlot> {
    if duration_hours <= 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(duration_hours as usize);
    let mut slot = start;

    for _ in 0..duration_hours {
        out.push(slot);
        slot = slot.next();
    }

    out
}

/// All slots of the bookable grid, opening inclusive, closing exclusive.
pub fn grid() -> Vec<TimeSlot> {
    (OPENING_HOUR..CLOSING_HOUR).map(TimeSlot::new).collect()
}
