/// Parses a free-text experience value ("5", "5+ years", "5-7 years") into whole years.
///
/// Every non-digit becomes a separator and the first numeric token wins.
/// Returns `None` for empty, digit-free or overflowing input.
pub fn parse_years_of_experience(raw: &str) -> Option<u32> {
    let separated: String = raw
        .chars()
        .map(|c| if c.is_ascii_digit() { c } else { ' ' })
        .collect();
    separated.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(parse_years_of_experience("5"), Some(5));
    }

    #[test]
    fn test_number_with_suffix() {
        assert_eq!(parse_years_of_experience("5+ years of work"), Some(5));
    }

    #[test]
    fn test_range_takes_first() {
        assert_eq!(parse_years_of_experience("5-7 years"), Some(5));
    }

    #[test]
    fn test_leading_text() {
        assert_eq!(parse_years_of_experience("about 3 yrs"), Some(3));
    }

    #[test]
    fn test_decimal_truncates_to_whole_part() {
        assert_eq!(parse_years_of_experience("2.5 years"), Some(2));
    }

    #[test]
    fn test_unparseable_is_none() {
        assert_eq!(parse_years_of_experience("fresher"), None);
        assert_eq!(parse_years_of_experience(""), None);
        assert_eq!(parse_years_of_experience("   "), None);
    }

    #[test]
    fn test_overflow_is_none() {
        assert_eq!(parse_years_of_experience("99999999999 years"), None);
    }
}
