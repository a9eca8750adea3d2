/// Size formatting utilities — human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

/// Unit suffixes, binary-scaled (1024) but labelled with the common
/// short forms (KB, MB, GB, TB) because that is what users expect
/// in a disk tool. Clamped at TB.
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with two decimals and the largest fitting unit.
///
/// Unit selection walks integer thresholds rather than computing
/// `log1024(bytes)` in floating point, so exact powers of 1024 land in the
/// correct unit: `format_size(1024)` is `"1.00 KB"`, never `"1024.00 B"`
/// or `"0.00 MB"`. Counts at or above 1 TB stay in TB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0usize;
    let mut scale = 1u64;
    while unit < UNITS.len() - 1 && bytes >= scale * 1024 {
        unit += 1;
        scale *= 1024;
    }
    format!("{:.2} {}", bytes as f64 / scale as f64, UNITS[unit])
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_the_bare_literal() {
        assert_eq!(format_size(0), "0 B");
    }

    #[test]
    fn sub_kilobyte_counts_keep_two_decimals() {
        assert_eq!(format_size(1), "1.00 B");
        assert_eq!(format_size(512), "512.00 B");
        assert_eq!(format_size(1023), "1023.00 B");
    }

    /// Exactly 1024 bytes must cross into KB, not stay in B or jump to MB.
    #[test]
    fn power_of_1024_boundaries() {
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.00 GB");
        assert_eq!(format_size(1024u64.pow(4)), "1.00 TB");
    }

    #[test]
    fn fractional_kilobytes() {
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(2048 + 1024 / 4), "2.25 KB");
    }

    /// Unit selection never exceeds TB regardless of magnitude.
    #[test]
    fn clamps_at_terabytes() {
        assert!(format_size(u64::MAX).ends_with(" TB"));
        assert!(format_size(1024u64.pow(5)).ends_with(" TB"));
        assert_eq!(format_size(1024u64.pow(5)), "1024.00 TB");
    }

    /// Within one unit the displayed magnitude never decreases as the
    /// byte count grows.
    #[test]
    fn monotonic_within_a_unit() {
        let mut last = 0.0f64;
        for kb in 1..2048u64 {
            let s = format_size(kb * 1024);
            let value: f64 = s
                .split(' ')
                .next()
                .and_then(|v| v.parse().ok())
                .expect("numeric prefix");
            if s.ends_with(" KB") {
                assert!(value >= last, "{s} regressed below {last}");
                last = value;
            }
        }
    }

    #[test]
    fn count_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
