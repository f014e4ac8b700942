//! In-process player table shared by the repository implementations.

use std::collections::BTreeMap;

use roster_core::{NewPlayer, PageRequest, Player, PlayerId, PlayerOrder, PlayerPredicate};

use super::{RepositoryError, Result};

/// Players indexed by id, plus the id sequence.
///
/// Ids start at 1 and are never reused, even after deletes.
#[derive(Clone, Debug)]
pub struct PlayerTable {
    players: BTreeMap<PlayerId, Player>,
    next_id: i64,
}

impl PlayerTable {
    pub fn new() -> Self {
        Self {
            players: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Rebuild a table from stored records.
    ///
    /// Fails on duplicate or non-positive ids, or when `next_id` would hand
    /// out an id that is already taken.
    pub fn from_records(next_id: i64, records: Vec<Player>) -> Result<Self> {
        let mut players = BTreeMap::new();
        for player in records {
            if player.id.get() <= 0 {
                return Err(RepositoryError::CorruptedData(format!(
                    "non-positive player id {}",
                    player.id
                )));
            }
            let id = player.id;
            if players.insert(id, player).is_some() {
                return Err(RepositoryError::CorruptedData(format!(
                    "duplicate player id {id}"
                )));
            }
        }

        if let Some(max) = players.keys().next_back()
            && max.get() >= next_id
        {
            return Err(RepositoryError::CorruptedData(format!(
                "next id {next_id} does not exceed stored id {max}"
            )));
        }

        Ok(Self { players, next_id })
    }

    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All players in id order.
    pub fn records(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn find(
        &self,
        predicate: &PlayerPredicate,
        page: PageRequest,
        order: PlayerOrder,
    ) -> Vec<Player> {
        let mut matching: Vec<&Player> = self
            .players
            .values()
            .filter(|player| predicate.matches(player))
            .collect();
        matching.sort_by(|a, b| order.compare(a, b));

        matching
            .into_iter()
            .skip(page.offset())
            .take(page.size() as usize)
            .cloned()
            .collect()
    }

    pub fn count(&self, predicate: &PlayerPredicate) -> usize {
        self.players
            .values()
            .filter(|player| predicate.matches(player))
            .count()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    pub fn insert(&mut self, new: NewPlayer) -> Player {
        let id = PlayerId(self.next_id);
        self.next_id += 1;

        let player = Player::create(id, new);
        self.players.insert(id, player.clone());
        player
    }

    pub fn save(&mut self, player: &Player) {
        if player.id.get() >= self.next_id {
            self.next_id = player.id.get() + 1;
        }
        self.players.insert(player.id, player.clone());
    }

    pub fn remove(&mut self, id: PlayerId) -> bool {
        self.players.remove(&id).is_some()
    }
}

impl Default for PlayerTable {
    fn default() -> Self {
        Self::new()
    }
}
