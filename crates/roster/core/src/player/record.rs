//! Persisted player record and validated creation input.

use std::fmt;

use chrono::{DateTime, Utc};

use super::{PlayerPatch, Profession, Race};
use crate::error::{Field, ValidationError};
use crate::progression::{current_level, until_next_level};
use crate::validate;

/// Store-assigned player identifier. Valid ids are strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub i64);

impl PlayerId {
    /// Wrap a raw id, rejecting zero and negative values.
    pub const fn new(raw: i64) -> Option<Self> {
        if raw > 0 { Some(Self(raw)) } else { None }
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored player.
///
/// `level` and `until_next_level` are derived from `experience` and are never
/// taken from callers; see [`crate::progression`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    #[cfg_attr(feature = "serde", serde(with = "chrono::serde::ts_milliseconds"))]
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

impl Player {
    /// Materialize a new player under a freshly assigned id.
    ///
    /// There is no stored level yet, so the level is computed first and the
    /// remaining experience is derived from it.
    pub fn create(id: PlayerId, new: NewPlayer) -> Self {
        let level = current_level(new.experience);
        Self {
            id,
            name: new.name,
            title: new.title,
            race: new.race,
            profession: new.profession,
            birthday: new.birthday,
            banned: new.banned,
            experience: new.experience,
            level,
            until_next_level: until_next_level(level, new.experience),
        }
    }

    /// Overwrite every field present in `patch`. Derived fields are untouched.
    pub fn merge(&mut self, patch: PlayerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(race) = patch.race {
            self.race = race;
        }
        if let Some(profession) = patch.profession {
            self.profession = profession;
        }
        if let Some(birthday) = patch.birthday {
            self.birthday = birthday;
        }
        if let Some(banned) = patch.banned {
            self.banned = banned;
        }
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
    }

    /// Re-derive progression after a merge.
    ///
    /// The remaining experience is computed from the level stored before this
    /// call; only afterwards is the level itself replaced.
    pub fn recompute_progression(&mut self) {
        self.until_next_level = until_next_level(self.level, self.experience);
        self.level = current_level(self.experience);
    }

    /// Check the format constraints on the current field values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::check_format(&self.name, &self.title, self.birthday, self.experience)
    }
}

/// Creation input with every required field present and well-formed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    pub experience: i32,
}

impl TryFrom<PlayerPatch> for NewPlayer {
    type Error = ValidationError;

    /// Requires every mandatory field, defaults `banned` to false, then checks formats.
    fn try_from(patch: PlayerPatch) -> Result<Self, Self::Error> {
        let name = patch.name.ok_or(ValidationError::MissingField(Field::Name))?;
        let title = patch
            .title
            .ok_or(ValidationError::MissingField(Field::Title))?;
        let race = patch.race.ok_or(ValidationError::MissingField(Field::Race))?;
        let experience = patch
            .experience
            .ok_or(ValidationError::MissingField(Field::Experience))?;
        let birthday = patch
            .birthday
            .ok_or(ValidationError::MissingField(Field::Birthday))?;
        let profession = patch
            .profession
            .ok_or(ValidationError::MissingField(Field::Profession))?;

        validate::check_format(&name, &title, birthday, experience)?;

        Ok(Self {
            name,
            title,
            race,
            profession,
            birthday,
            banned: patch.banned.unwrap_or(false),
            experience,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn patch() -> PlayerPatch {
        PlayerPatch {
            name: Some("Ab".to_string()),
            title: Some("T".to_string()),
            race: Some(Race::Elf),
            profession: Some(Profession::Warrior),
            birthday: Some(Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0).unwrap()),
            banned: None,
            experience: Some(100),
        }
    }

    #[test]
    fn test_player_id_rejects_non_positive() {
        assert_eq!(PlayerId::new(0), None);
        assert_eq!(PlayerId::new(-3), None);
        assert_eq!(PlayerId::new(7).map(PlayerId::get), Some(7));
    }

    #[test]
    fn test_new_player_defaults_banned() {
        let new = NewPlayer::try_from(patch()).unwrap();
        assert!(!new.banned);

        let banned = NewPlayer::try_from(PlayerPatch {
            banned: Some(true),
            ..patch()
        })
        .unwrap();
        assert!(banned.banned);
    }

    #[test]
    fn test_new_player_reports_first_missing_field() {
        let err = NewPlayer::try_from(PlayerPatch {
            title: None,
            profession: None,
            ..patch()
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingField(Field::Title));
    }

    #[test]
    fn test_missing_field_wins_over_format() {
        // Over-long name and no experience: required-ness is checked first.
        let err = NewPlayer::try_from(PlayerPatch {
            name: Some("AAAAAAAAAAAA".to_string()),
            experience: None,
            ..patch()
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingField(Field::Experience));
    }

    #[test]
    fn test_create_computes_progression_from_fresh_level() {
        let new = NewPlayer::try_from(patch()).unwrap();
        let player = Player::create(PlayerId(1), new);

        assert_eq!(player.level, 1);
        assert_eq!(player.until_next_level, 200);
    }

    #[test]
    fn test_recompute_uses_stored_level_for_remaining_experience() {
        let mut player = Player::create(PlayerId(1), NewPlayer::try_from(patch()).unwrap());
        assert_eq!(player.level, 1);

        player.merge(PlayerPatch {
            experience: Some(1000),
            ..PlayerPatch::default()
        });
        player.recompute_progression();

        assert_eq!(player.level, 4);
        // 50 * (1 + 1) * (1 + 2) - 1000, computed from the level stored before the update
        assert_eq!(player.until_next_level, -700);
    }

    #[test]
    fn test_merge_only_overwrites_present_fields() {
        let mut player = Player::create(PlayerId(1), NewPlayer::try_from(patch()).unwrap());
        player.merge(PlayerPatch {
            title: Some("Warden".to_string()),
            banned: Some(true),
            ..PlayerPatch::default()
        });

        assert_eq!(player.name, "Ab");
        assert_eq!(player.title, "Warden");
        assert!(player.banned);
        assert_eq!(player.experience, 100);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_shape() {
        let player = Player::create(PlayerId(9), NewPlayer::try_from(patch()).unwrap());
        let value = serde_json::to_value(&player).unwrap();

        assert_eq!(value["id"], 9);
        assert_eq!(value["race"], "ELF");
        assert_eq!(value["profession"], "WARRIOR");
        assert_eq!(value["untilNextLevel"], 200);
        assert_eq!(
            value["birthday"],
            Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0)
                .unwrap()
                .timestamp_millis()
        );

        let back: Player = serde_json::from_value(value).unwrap();
        assert_eq!(back, player);
    }
}
