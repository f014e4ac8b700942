//! Format constraints shared by creation and update.

use chrono::{DateTime, Datelike, Utc};

use crate::error::{Field, ValidationError};

/// Names must be shorter than this many characters.
pub const NAME_LENGTH_LIMIT: usize = 12;
/// Titles must be shorter than this many characters.
pub const TITLE_LENGTH_LIMIT: usize = 30;
/// Experience must lie strictly between these bounds.
pub const EXPERIENCE_BOUNDS: (i32, i32) = (0, 10_000_000);
/// Birthday years (UTC) must lie strictly between these bounds.
pub const BIRTHDAY_YEAR_BOUNDS: (i32, i32) = (2000, 3000);

/// Check name, title, experience and birthday in that order.
pub fn check_format(
    name: &str,
    title: &str,
    birthday: DateTime<Utc>,
    experience: i32,
) -> Result<(), ValidationError> {
    let name_len = name.chars().count();
    if name_len == 0 {
        return Err(ValidationError::invalid(Field::Name, "must not be empty"));
    }
    if name_len >= NAME_LENGTH_LIMIT {
        return Err(ValidationError::invalid(
            Field::Name,
            "must be at most 11 characters",
        ));
    }
    if title.chars().count() >= TITLE_LENGTH_LIMIT {
        return Err(ValidationError::invalid(
            Field::Title,
            "must be at most 29 characters",
        ));
    }

    let (min_xp, max_xp) = EXPERIENCE_BOUNDS;
    if experience <= min_xp || experience >= max_xp {
        return Err(ValidationError::invalid(
            Field::Experience,
            "must be between 1 and 9999999",
        ));
    }

    let (min_year, max_year) = BIRTHDAY_YEAR_BOUNDS;
    let year = birthday.year();
    if year <= min_year || year >= max_year {
        return Err(ValidationError::invalid(
            Field::Birthday,
            "year must be between 2001 and 2999",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn year(y: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_accepts_boundary_values() {
        assert!(check_format("A", "", year(2001), 1).is_ok());
        assert!(check_format("AAAAAAAAAAA", &"t".repeat(29), year(2999), 9_999_999).is_ok());
    }

    #[test]
    fn test_name_bounds() {
        let err = check_format("", "T", year(2020), 10).unwrap_err();
        assert_eq!(err.field(), Field::Name);

        let err = check_format("AAAAAAAAAAAA", "T", year(2020), 10).unwrap_err();
        assert_eq!(err.field(), Field::Name);
    }

    #[test]
    fn test_title_bound() {
        let err = check_format("Ab", &"t".repeat(30), year(2020), 10).unwrap_err();
        assert_eq!(err.field(), Field::Title);
    }

    #[test]
    fn test_experience_bounds_are_exclusive() {
        for xp in [0, -5, 10_000_000] {
            let err = check_format("Ab", "T", year(2020), xp).unwrap_err();
            assert_eq!(err.field(), Field::Experience);
        }
    }

    #[test]
    fn test_birthday_year_bounds_are_exclusive() {
        for y in [1999, 2000, 3000, 3001] {
            let err = check_format("Ab", "T", year(y), 10).unwrap_err();
            assert_eq!(err.field(), Field::Birthday);
        }
    }
}
