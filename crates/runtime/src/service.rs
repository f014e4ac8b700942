//! Player operations invoked by the HTTP surface.
//!
//! The service turns caller input into predicates, page requests and
//! validated records, and keeps the derived progression fields in step with
//! experience. It holds no state of its own beyond the shared repository.

use std::sync::Arc;

use roster_core::{
    NewPlayer, PageRequest, Player, PlayerFilter, PlayerId, PlayerOrder, PlayerPatch,
};

use crate::api::{Result, ServiceError};
use crate::repository::{InMemoryPlayerRepo, PlayerRepository};

/// Cloneable façade over a [`PlayerRepository`].
#[derive(Clone)]
pub struct PlayerService {
    repo: Arc<dyn PlayerRepository>,
}

impl PlayerService {
    pub fn new(repo: Arc<dyn PlayerRepository>) -> Self {
        Self { repo }
    }

    /// Service backed by a fresh [`InMemoryPlayerRepo`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPlayerRepo::new()))
    }

    /// One page of matching players, sorted ascending by `order`.
    pub fn list(
        &self,
        filter: &PlayerFilter,
        page_number: u32,
        page_size: u32,
        order: PlayerOrder,
    ) -> Result<Vec<Player>> {
        let page = PageRequest::new(page_number, page_size)?;
        let players = self.repo.find(&filter.predicate(), page, order)?;

        tracing::debug!(
            "Listed {} players (page {} of size {}, by {})",
            players.len(),
            page.number(),
            page.size(),
            order.field_name()
        );
        Ok(players)
    }

    /// Number of players matching `filter`.
    pub fn count(&self, filter: &PlayerFilter) -> Result<usize> {
        Ok(self.repo.count(&filter.predicate())?)
    }

    /// Validate and store a new player.
    pub fn create(&self, payload: PlayerPatch) -> Result<Player> {
        let new = NewPlayer::try_from(payload)?;
        let player = self.repo.insert(new)?;

        tracing::info!("Created player {} ({})", player.id, player.name);
        Ok(player)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Player> {
        let id = checked_id(id)?;
        self.repo
            .find_by_id(id)?
            .ok_or(ServiceError::NotFound(id.get()))
    }

    pub fn exists_by_id(&self, id: i64) -> Result<bool> {
        let id = checked_id(id)?;
        Ok(self.repo.exists(id)?)
    }

    /// Permanently remove a player.
    pub fn delete_by_id(&self, id: i64) -> Result<()> {
        let id = checked_id(id)?;
        if !self.repo.delete(id)? {
            return Err(ServiceError::NotFound(id.get()));
        }

        tracing::info!("Deleted player {}", id);
        Ok(())
    }

    /// Merge the present fields of `patch` into a stored player.
    ///
    /// An empty patch returns the stored record as is. Otherwise the merged
    /// record must pass format validation, then progression is recomputed and
    /// the record is written. A rejected update leaves the stored record untouched.
    pub fn update_by_id(&self, id: i64, patch: PlayerPatch) -> Result<Player> {
        let id = checked_id(id)?;
        let mut player = self
            .repo
            .find_by_id(id)?
            .ok_or(ServiceError::NotFound(id.get()))?;

        if patch.is_empty() {
            return Ok(player);
        }

        player.merge(patch);
        player.validate()?;
        player.recompute_progression();

        self.repo.save(&player)?;

        tracing::info!("Updated player {}", id);
        Ok(player)
    }
}

fn checked_id(raw: i64) -> Result<PlayerId> {
    PlayerId::new(raw).ok_or(ServiceError::NonPositiveId(raw))
}
