//! Dynamic filter predicates over players.
//!
//! A [`PlayerFilter`] holds the optional criteria a caller supplied. Building
//! it yields a [`PlayerPredicate`]: one [`Criterion`] per present field,
//! combined with logical AND. Stores evaluate the same predicate for both
//! paged queries and counts, so both always agree on what matches.

use crate::player::{Player, Profession, Race};

/// Optional listing criteria. Absent fields do not constrain the result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    /// Case-sensitive substring of the name.
    pub name: Option<String>,
    /// Case-sensitive substring of the title.
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Latest accepted birthday, epoch milliseconds (inclusive).
    pub born_at_most: Option<i64>,
    /// Earliest accepted birthday, epoch milliseconds (inclusive).
    pub born_at_least: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

impl PlayerFilter {
    /// Translate every present field into one conjunct.
    pub fn predicate(&self) -> PlayerPredicate {
        let mut criteria = Vec::new();

        if let Some(name) = &self.name {
            criteria.push(Criterion::NameContains(name.clone()));
        }
        if let Some(title) = &self.title {
            criteria.push(Criterion::TitleContains(title.clone()));
        }
        if let Some(race) = self.race {
            criteria.push(Criterion::RaceIs(race));
        }
        if let Some(profession) = self.profession {
            criteria.push(Criterion::ProfessionIs(profession));
        }
        if let Some(millis) = self.born_at_most {
            criteria.push(Criterion::BornAtMost(millis));
        }
        if let Some(millis) = self.born_at_least {
            criteria.push(Criterion::BornAtLeast(millis));
        }
        if let Some(min) = self.min_experience {
            criteria.push(Criterion::ExperienceAtLeast(min));
        }
        if let Some(max) = self.max_experience {
            criteria.push(Criterion::ExperienceAtMost(max));
        }
        if let Some(min) = self.min_level {
            criteria.push(Criterion::LevelAtLeast(min));
        }
        if let Some(max) = self.max_level {
            criteria.push(Criterion::LevelAtMost(max));
        }
        if let Some(banned) = self.banned {
            criteria.push(Criterion::BannedIs(banned));
        }

        PlayerPredicate { criteria }
    }
}

/// A single test against one player field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Criterion {
    NameContains(String),
    TitleContains(String),
    RaceIs(Race),
    ProfessionIs(Profession),
    BornAtMost(i64),
    BornAtLeast(i64),
    BannedIs(bool),
    ExperienceAtLeast(i32),
    ExperienceAtMost(i32),
    LevelAtLeast(i32),
    LevelAtMost(i32),
}

impl Criterion {
    pub fn matches(&self, player: &Player) -> bool {
        match self {
            Self::NameContains(part) => player.name.contains(part.as_str()),
            Self::TitleContains(part) => player.title.contains(part.as_str()),
            Self::RaceIs(race) => player.race == *race,
            Self::ProfessionIs(profession) => player.profession == *profession,
            Self::BornAtMost(millis) => player.birthday.timestamp_millis() <= *millis,
            Self::BornAtLeast(millis) => player.birthday.timestamp_millis() >= *millis,
            Self::BannedIs(banned) => player.banned == *banned,
            Self::ExperienceAtLeast(min) => player.experience >= *min,
            Self::ExperienceAtMost(max) => player.experience <= *max,
            Self::LevelAtLeast(min) => player.level >= *min,
            Self::LevelAtMost(max) => player.level <= *max,
        }
    }
}

/// Conjunction of criteria. The empty predicate matches every player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerPredicate {
    criteria: Vec<Criterion>,
}

impl PlayerPredicate {
    /// Predicate without criteria.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn matches(&self, player: &Player) -> bool {
        self.criteria.iter().all(|criterion| criterion.matches(player))
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}
