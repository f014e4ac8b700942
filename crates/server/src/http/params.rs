//! Query-string parameters for listing and counting.

use roster_core::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PlayerFilter, PlayerOrder, Profession, Race,
};
use serde::Deserialize;

/// Query parameters accepted by `GET /players` and `GET /players/count`.
///
/// The count route ignores the paging and order fields.
///
/// Birthday bounds are plain on the wire: `after` is the earliest accepted
/// birthday and `before` the latest.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQuery {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Epoch milliseconds; birthday must be at or before this instant.
    pub before: Option<i64>,
    /// Epoch milliseconds; birthday must be at or after this instant.
    pub after: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub order: Option<PlayerOrder>,
}

impl PlayerQuery {
    pub fn filter(&self) -> PlayerFilter {
        PlayerFilter {
            name: self.name.clone(),
            title: self.title.clone(),
            race: self.race,
            profession: self.profession,
            born_at_most: self.before,
            born_at_least: self.after,
            banned: self.banned,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn order(&self) -> PlayerOrder {
        self.order.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = PlayerQuery::default();
        assert_eq!(query.page_number(), 0);
        assert_eq!(query.page_size(), 3);
        assert_eq!(query.order(), PlayerOrder::Id);
        assert_eq!(query.filter(), PlayerFilter::default());
    }

    #[test]
    fn test_birthday_bounds() {
        let query = PlayerQuery {
            before: Some(2_000),
            after: Some(1_000),
            ..PlayerQuery::default()
        };
        let filter = query.filter();

        assert_eq!(filter.born_at_least, Some(1_000));
        assert_eq!(filter.born_at_most, Some(2_000));
    }
}
