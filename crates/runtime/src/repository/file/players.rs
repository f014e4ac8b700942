//! File-based PlayerRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use roster_core::{NewPlayer, PageRequest, Player, PlayerId, PlayerOrder, PlayerPredicate};
use serde::{Deserialize, Serialize};

use crate::repository::{PlayerRepository, PlayerTable, RepositoryError, Result};

const SNAPSHOT_FILE: &str = "players.json";

/// File-based implementation of PlayerRepository.
///
/// Serves reads from an in-memory [`PlayerTable`] and rewrites a JSON
/// snapshot of the whole table after every mutation.
///
/// # File Format
///
/// `{base_dir}/players.json`:
/// ```text
/// { "nextId": 4, "players": [ { "id": 1, "name": "...", ... }, ... ] }
/// ```
///
/// A mutation is applied to a copy of the table, written to
/// `players.json.tmp`, renamed over the snapshot, and only then made visible.
/// A failed write leaves both the file and the served records unchanged.
pub struct FilePlayerRepository {
    path: PathBuf,
    table: RwLock<PlayerTable>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a> {
    next_id: i64,
    players: Vec<&'a Player>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    next_id: i64,
    players: Vec<Player>,
}

impl FilePlayerRepository {
    /// Open the repository under `base_dir`, loading an existing snapshot.
    pub fn open(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        let path = base_dir.join(SNAPSHOT_FILE);

        let table = if path.exists() {
            let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
            let snapshot: Snapshot = serde_json::from_slice(&bytes)
                .map_err(|e| RepositoryError::Json(e.to_string()))?;
            let table = PlayerTable::from_records(snapshot.next_id, snapshot.players)?;
            tracing::info!(
                "Loaded {} players from {}",
                table.len(),
                path.display()
            );
            table
        } else {
            tracing::info!("No snapshot at {}, starting empty", path.display());
            PlayerTable::new()
        };

        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    /// Path of the JSON snapshot.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, table: &PlayerTable) -> Result<()> {
        let snapshot = SnapshotRef {
            next_id: table.next_id(),
            players: table.records().collect(),
        };
        let bytes = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved {} players to {}",
            table.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Apply `change` to a copy of the table, persist it, then publish it.
    fn mutate<T>(&self, change: impl FnOnce(&mut PlayerTable) -> T) -> Result<T> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let mut next = table.clone();
        let outcome = change(&mut next);
        self.persist(&next)?;
        *table = next;

        Ok(outcome)
    }
}

impl PlayerRepository for FilePlayerRepository {
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
        self.mutate(|table| table.insert(new))
    }

    fn save(&self, player: &Player) -> Result<()> {
        self.mutate(|table| table.save(player))
    }

    fn delete(&self, id: PlayerId) -> Result<bool> {
        let removed = {
            let table = self
                .table
                .read()
                .map_err(|_| RepositoryError::LockPoisoned)?;
            table.contains(id)
        };
        if !removed {
            return Ok(false);
        }
        self.mutate(|table| table.remove(id))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use roster_core::{Profession, Race};
    use tempfile::TempDir;

    use super::*;

    fn new_player(name: &str) -> NewPlayer {
        NewPlayer {
            name: name.to_string(),
            title: "Warden".to_string(),
            race: Race::Giant,
            profession: Profession::Paladin,
            birthday: Utc.with_ymd_and_hms(2042, 8, 9, 10, 11, 12).unwrap(),
            banned: true,
            experience: 4_321,
        }
    }

    #[test]
    fn test_open_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FilePlayerRepository::open(temp_dir.path()).unwrap();

        assert_eq!(repo.count(&PlayerPredicate::any()).unwrap(), 0);
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_records_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();

        let (kept, dropped) = {
            let repo = FilePlayerRepository::open(temp_dir.path()).unwrap();
            let kept = repo.insert(new_player("Kept")).unwrap();
            let dropped = repo.insert(new_player("Dropped")).unwrap();
            assert!(repo.delete(dropped.id).unwrap());
            (kept, dropped)
        };

        let repo = FilePlayerRepository::open(temp_dir.path()).unwrap();
        assert_eq!(repo.find_by_id(kept.id).unwrap(), Some(kept));
        assert!(!repo.exists(dropped.id).unwrap());

        // The sequence is persisted too, so deleted ids stay retired.
        let next = repo.insert(new_player("Next")).unwrap();
        assert_eq!(next.id.get(), 3);
    }

    #[test]
    fn test_save_replaces_record() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FilePlayerRepository::open(temp_dir.path()).unwrap();

        let mut player = repo.insert(new_player("Old")).unwrap();
        player.name = "New".to_string();
        repo.save(&player).unwrap();

        let reopened = FilePlayerRepository::open(temp_dir.path()).unwrap();
        let loaded = reopened.find_by_id(player.id).unwrap().unwrap();
        assert_eq!(loaded.name, "New");
    }

    #[test]
    fn test_delete_missing_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FilePlayerRepository::open(temp_dir.path()).unwrap();

        assert!(!repo.delete(PlayerId(42)).unwrap());
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_corrupted_snapshot_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(SNAPSHOT_FILE), b"{ not json").unwrap();

        assert!(matches!(
            FilePlayerRepository::open(temp_dir.path()),
            Err(RepositoryError::Json(_))
        ));
    }
}
