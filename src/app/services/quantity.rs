/// Parse a quantity typed by the user.
///
/// Returns None unless the trimmed text is a positive integer.
pub fn parse_quantity(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|&q| q >= 1)
}

/// Apply a plus/minus stepper press.
///
/// The minus button does nothing once the quantity is 1; the plus button
/// saturates instead of overflowing.
pub fn step_quantity(current: u32, delta: i64) -> u32 {
    let next = i64::from(current).saturating_add(delta);
    if next < 1 {
        current.max(1)
    } else {
        u32::try_from(next).unwrap_or(u32::MAX)
    }
}

/// Clamp a requested party size into `[min, max]`.
pub fn clamp_party_size(requested: i64, min: usize, max: usize) -> usize {
    if requested < min as i64 {
        min
    } else if requested > max as i64 {
        max
    } else {
        requested as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity(" 12 "), Some(12));
        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("-2"), None);
        assert_eq!(parse_quantity("two"), None);
        assert_eq!(parse_quantity(""), None);
    }

    #[test]
    fn test_step_quantity() {
        assert_eq!(step_quantity(1, 1), 2);
        assert_eq!(step_quantity(5, -1), 4);
        assert_eq!(step_quantity(1, -1), 1);
        assert_eq!(step_quantity(3, -10), 3);
        assert_eq!(step_quantity(u32::MAX, 1), u32::MAX);
    }

    #[test]
    fn test_clamp_party_size() {
        assert_eq!(clamp_party_size(0, 1, 50), 1);
        assert_eq!(clamp_party_size(-7, 1, 50), 1);
        assert_eq!(clamp_party_size(999, 1, 50), 50);
        assert_eq!(clamp_party_size(12, 1, 50), 12);
    }
}
