//! Calendar helpers.

/// Gregorian leap-year rule.
///
/// Divisible by 4, except centuries, except centuries divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        for (year, expected) in [(2000, true), (1900, false), (2024, true), (2023, false)] {
            assert_eq!(is_leap_year(year), expected, "year {}", year);
        }
    }

    #[test]
    fn test_birth_year_is_not_leap() {
        assert!(!is_leap_year(1989));
    }

    #[test]
    fn test_negative_years_follow_the_same_rule() {
        assert!(is_leap_year(-400));
        assert!(!is_leap_year(-100));
    }
}
