//! Display formatting for durations

/// Format seconds as "m:ss" (e.g. "3:07", "80:00")
///
/// Fractional seconds are truncated. Minutes are not folded into hours.
pub fn format_duration(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(7.9), "0:07");
        assert_eq!(format_duration(60.0), "1:00");
        assert_eq!(format_duration(187.0), "3:07");
        assert_eq!(format_duration(4800.0), "80:00");
    }

    #[test]
    fn test_format_duration_negative() {
        assert_eq!(format_duration(-3.0), "0:00");
    }
}
