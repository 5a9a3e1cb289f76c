//! Minute/hour conversions.

/// Minutes → hours rounded to two decimals (8h 15m → 8.25).
pub fn minutes_to_hours(mins: i64) -> f64 {
    (mins as f64 / 60.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_are_rounded_to_two_decimals() {
        assert_eq!(minutes_to_hours(495), 8.25);
        assert_eq!(minutes_to_hours(540), 9.0);
        assert_eq!(minutes_to_hours(20), 0.33);
        assert_eq!(minutes_to_hours(-75), -1.25);
    }
}
