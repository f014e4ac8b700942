//! Service construction from configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use roster_runtime::{FilePlayerRepository, InMemoryPlayerRepo, PlayerRepository, PlayerService};

use crate::config::{StoreConfig, StoreKind};

/// Build the player service over the configured repository.
pub fn build_service(config: &StoreConfig) -> Result<PlayerService> {
    let repo: Arc<dyn PlayerRepository> = match config.kind {
        StoreKind::Memory => {
            tracing::info!("Using in-memory player store");
            Arc::new(InMemoryPlayerRepo::new())
        }
        StoreKind::File => {
            let data_dir = config.data_dir();
            let repo = FilePlayerRepository::open(&data_dir).with_context(|| {
                format!("Failed to open player store at {}", data_dir.display())
            })?;
            tracing::info!("Using file player store: {}", repo.path().display());
            Arc::new(repo)
        }
    };

    Ok(PlayerService::new(repo))
}
