//! Caller-supplied player fields, each independently optional.

use chrono::{DateTime, Utc};

use super::{Profession, Race};

/// Body of both create and update requests.
///
/// An absent field and an explicit `null` are the same thing: `None`. On
/// create every field except `banned` is required; on update each present
/// field overwrites the stored one. `id`, `level` and `untilNextLevel` are not
/// part of the payload and are ignored when sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    #[cfg_attr(
        feature = "serde",
        serde(with = "chrono::serde::ts_milliseconds_option")
    )]
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub experience: Option<i32>,
}

impl PlayerPatch {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.race.is_none()
            && self.profession.is_none()
            && self.birthday.is_none()
            && self.banned.is_none()
            && self.experience.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patch_is_empty() {
        assert!(PlayerPatch::default().is_empty());
        assert!(
            !PlayerPatch {
                banned: Some(false),
                ..PlayerPatch::default()
            }
            .is_empty()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_body() {
        let patch: PlayerPatch = serde_json::from_str(
            r#"{"title":"Keeper","birthday":988675200000,"race":null,"level":99,"id":4}"#,
        )
        .unwrap();

        assert_eq!(patch.title.as_deref(), Some("Keeper"));
        assert_eq!(patch.race, None);
        assert_eq!(
            patch.birthday.map(|b| b.timestamp_millis()),
            Some(988_675_200_000)
        );
        assert_eq!(patch.experience, None);
    }
}
