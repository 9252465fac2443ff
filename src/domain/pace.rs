//! Distance, duration, and pace form-field utilities.
//!
//! These back the record-entry forms: distance and the duration parts
//! arrive as strings and are parsed here; pace is always derived, never
//! stored.

use crate::domain::error::ValidationError;

/// Placeholder shown when a pace cannot be computed.
pub const PACE_PLACEHOLDER: &str = "--:-- / km";

/// Parse a distance field in kilometers.
///
/// Accepts plain decimal notation. Zero is allowed here (the pace display
/// degrades to a placeholder); record drafts reject it separately.
pub fn parse_distance_km(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::MalformedNumber {
            field: "distance",
            value: input.to_string(),
        })?;
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::MalformedNumber {
            field: "distance",
            value: input.to_string(),
        });
    }
    Ok(value)
}

/// Combine hour/minute/second form fields into total seconds.
///
/// Empty fields count as zero.
pub fn duration_from_parts(
    hours: &str,
    minutes: &str,
    seconds: &str,
) -> Result<u32, ValidationError> {
    let h = parse_part("hours", hours)?;
    let m = parse_part("minutes", minutes)?;
    let s = parse_part("seconds", seconds)?;
    Ok(h * 3600 + m * 60 + s)
}

fn parse_part(field: &'static str, input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|_| ValidationError::MalformedNumber {
            field,
            value: input.to_string(),
        })
}

/// Format a pace as `M'SS" / km`.
///
/// A zero or non-finite distance, or a zero duration, yields
/// [`PACE_PLACEHOLDER`]. Seconds are rounded and carry into minutes.
#[must_use]
pub fn format_pace(distance_km: f64, duration_secs: u32) -> String {
    if !(distance_km > 0.0) || !distance_km.is_finite() || duration_secs == 0 {
        return PACE_PLACEHOLDER.to_string();
    }
    let secs_per_km = (f64::from(duration_secs) / distance_km).round() as u64;
    let minutes = secs_per_km / 60;
    let seconds = secs_per_km % 60;
    format!("{minutes}'{seconds:02}\" / km")
}

/// Format a total duration as `H:MM:SS` (or `M:SS` under an hour).
#[must_use]
pub fn format_duration(duration_secs: u32) -> String {
    let hours = duration_secs / 3600;
    let minutes = (duration_secs % 3600) / 60;
    let seconds = duration_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_km_in_twenty_five_minutes() {
        let distance = parse_distance_km("5").unwrap();
        let duration = duration_from_parts("0", "25", "0").unwrap();
        assert_eq!(format_pace(distance, duration), "5'00\" / km");
    }

    #[test]
    fn zero_distance_shows_placeholder() {
        let distance = parse_distance_km("0").unwrap();
        assert_eq!(format_pace(distance, 1500), PACE_PLACEHOLDER);
    }

    #[test]
    fn zero_duration_shows_placeholder() {
        assert_eq!(format_pace(5.0, 0), PACE_PLACEHOLDER);
    }

    #[test]
    fn seconds_round_and_carry() {
        // 10 km in 49:59 → 299.9 s/km → 5'00"
        assert_eq!(format_pace(10.0, 2999), "5'00\" / km");
        // 3 km in 16:00 → 320 s/km → 5'20"
        assert_eq!(format_pace(3.0, 960), "5'20\" / km");
    }

    #[test]
    fn rejects_malformed_distance() {
        assert!(matches!(
            parse_distance_km("five"),
            Err(ValidationError::MalformedNumber { field: "distance", .. })
        ));
        assert!(parse_distance_km("-1").is_err());
        assert!(parse_distance_km("inf").is_err());
    }

    #[test]
    fn empty_duration_parts_count_as_zero() {
        assert_eq!(duration_from_parts("", "25", "").unwrap(), 1500);
        assert_eq!(duration_from_parts("1", "", "30").unwrap(), 3630);
    }

    #[test]
    fn rejects_malformed_duration_part() {
        assert!(matches!(
            duration_from_parts("0", "twenty", "0"),
            Err(ValidationError::MalformedNumber { field: "minutes", .. })
        ));
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(1500), "25:00");
        assert_eq!(format_duration(3661), "1:01:01");
    }
}
