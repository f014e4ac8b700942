//! Closed race and profession sets.
//!
//! Both enums share the wire spelling used by query parameters and JSON bodies
//! (`ELF`, `WARRIOR`), parsed case-insensitively from query strings.

/// Player race.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

/// Player profession.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_race_wire_names() {
        assert_eq!(Race::Elf.to_string(), "ELF");
        assert_eq!(Race::from_str("HOBBIT").unwrap(), Race::Hobbit);
        assert_eq!(Race::from_str("troll").unwrap(), Race::Troll);
        assert!(Race::from_str("GOBLIN").is_err());
        assert_eq!(Race::iter().count(), 7);
    }

    #[test]
    fn test_profession_wire_names() {
        assert_eq!(Profession::Nazgul.as_ref(), "NAZGUL");
        assert_eq!(Profession::from_str("Warlock").unwrap(), Profession::Warlock);
        assert_eq!(Profession::iter().count(), 8);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_spelling_matches_query_spelling() {
        for race in Race::iter() {
            let json = serde_json::to_string(&race).unwrap();
            assert_eq!(json, format!("\"{race}\""));
        }
        for profession in Profession::iter() {
            let json = serde_json::to_string(&profession).unwrap();
            assert_eq!(json, format!("\"{profession}\""));
        }
    }
}
