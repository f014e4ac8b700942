//! In-memory PlayerRepository implementation.

use std::sync::RwLock;

use roster_core::{NewPlayer, PageRequest, Player, PlayerId, PlayerOrder, PlayerPredicate};

use crate::repository::{PlayerRepository, PlayerTable, RepositoryError, Result};

/// In-memory implementation of PlayerRepository.
///
/// Thread-safe but not persistent across process restarts.
pub struct InMemoryPlayerRepo {
    table: RwLock<PlayerTable>,
}

impl InMemoryPlayerRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(PlayerTable::new()),
        }
    }
}

impl Default for InMemoryPlayerRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRepository for InMemoryPlayerRepo {
    fn find(
        &self,
        predicate: &PlayerPredicate,
        page: PageRequest,
        order: PlayerOrder,
    ) -> Result<Vec<Player>> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(table.find(predicate, page, order))
    }

    fn count(&self, predicate: &PlayerPredicate) -> Result<usize> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(table.count(predicate))
    }

    fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(table.get(id).cloned())
    }

    fn exists(&self, id: PlayerId) -> Result<bool> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(table.contains(id))
    }

    fn insert(&self, new: NewPlayer) -> Result<Player> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(table.insert(new))
    }

    fn save(&self, player: &Player) -> Result<()> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        table.save(player);
        Ok(())
    }

    fn delete(&self, id: PlayerId) -> Result<bool> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(table.remove(id))
    }
}
