//! Sortable player fields.

use std::cmp::Ordering;

use crate::player::Player;

/// Field a listing is sorted by, ascending.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

impl PlayerOrder {
    /// Record field this order sorts on.
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Experience => "experience",
            Self::Birthday => "birthday",
            Self::Level => "level",
        }
    }

    /// Compare by the selected field, falling back to id so pages are stable.
    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        let primary = match self {
            Self::Id => Ordering::Equal,
            Self::Name => a.name.cmp(&b.name),
            Self::Experience => a.experience.cmp(&b.experience),
            Self::Birthday => a.birthday.cmp(&b.birthday),
            Self::Level => a.level.cmp(&b.level),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::player::{PlayerId, Profession, Race};

    fn player(id: i64, name: &str, experience: i32) -> Player {
        Player {
            id: PlayerId(id),
            name: name.to_string(),
            title: String::new(),
            race: Race::Orc,
            profession: Profession::Rogue,
            birthday: Utc.with_ymd_and_hms(2001 + id as i32, 1, 1, 0, 0, 0).unwrap(),
            banned: false,
            experience,
            level: crate::current_level(experience),
            until_next_level: 0,
        }
    }

    #[test]
    fn test_parse_order() {
        assert_eq!(PlayerOrder::from_str("NAME").unwrap(), PlayerOrder::Name);
        assert_eq!(PlayerOrder::from_str("level").unwrap(), PlayerOrder::Level);
        assert!(PlayerOrder::from_str("TITLE").is_err());
        assert_eq!(PlayerOrder::default().field_name(), "id");
    }

    #[test]
    fn test_ties_fall_back_to_id() {
        let mut players = vec![player(3, "Bo", 50), player(1, "Bo", 900), player(2, "Al", 50)];

        players.sort_by(|a, b| PlayerOrder::Name.compare(a, b));
        let ids: Vec<i64> = players.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        players.sort_by(|a, b| PlayerOrder::Experience.compare(a, b));
        let ids: Vec<i64> = players.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
