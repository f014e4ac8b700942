//! Repository contract for player persistence.

use roster_core::{NewPlayer, PageRequest, Player, PlayerId, PlayerOrder, PlayerPredicate};

use super::Result;

/// Store for player records.
///
/// Every method is atomic on its own. Sequences of calls (read, modify,
/// save) are not isolated from concurrent callers.
pub trait PlayerRepository: Send + Sync {
    /// One page of the players matching `predicate`, sorted ascending by `order`.
    fn find(
        &self,
        predicate: &PlayerPredicate,
        page: PageRequest,
        order: PlayerOrder,
    ) -> Result<Vec<Player>>;

    /// Number of players matching `predicate`.
    fn count(&self, predicate: &PlayerPredicate) -> Result<usize>;

    /// Load a player by id.
    fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>>;

    /// Check if a player exists.
    fn exists(&self, id: PlayerId) -> Result<bool> {
        Ok(self.find_by_id(id)?.is_some())
    }

    /// Assign the next id to `new` and store it.
    fn insert(&self, new: NewPlayer) -> Result<Player>;

    /// Store `player` under its id, replacing any previous record.
    fn save(&self, player: &Player) -> Result<()>;

    /// Remove a player. Returns whether a record was removed.
    fn delete(&self, id: PlayerId) -> Result<bool>;
}
