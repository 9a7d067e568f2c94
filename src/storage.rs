//! Tournament persistence: one JSON document per tournament, with an in-memory fallback.

use crate::models::{Tournament, TournamentId};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Errors from a tournament store.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// A lock was poisoned by a panicking writer.
    Poisoned,
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage I/O error: {}", e),
            StorageError::Json(e) => write!(f, "stored tournament is not valid JSON: {}", e),
            StorageError::Poisoned => write!(f, "storage lock poisoned"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

/// Where tournament records (including their `rounds`) are saved after each change.
pub trait TournamentStore: Send + Sync {
    fn save(&self, tournament: &Tournament) -> Result<(), StorageError>;
    fn load(&self, id: TournamentId) -> Result<Option<Tournament>, StorageError>;
    fn delete(&self, id: TournamentId) -> Result<(), StorageError>;
}

/// Keeps tournaments for the life of the process only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tournaments: RwLock<HashMap<TournamentId, Tournament>>,
}

impl TournamentStore for MemoryStore {
    fn save(&self, tournament: &Tournament) -> Result<(), StorageError> {
        self.tournaments
            .write()
            .map_err(|_| StorageError::Poisoned)?
            .insert(tournament.id, tournament.clone());
        Ok(())
    }

    fn load(&self, id: TournamentId) -> Result<Option<Tournament>, StorageError> {
        let g = self.tournaments.read().map_err(|_| StorageError::Poisoned)?;
        Ok(g.get(&id).cloned())
    }

    fn delete(&self, id: TournamentId) -> Result<(), StorageError> {
        self.tournaments
            .write()
            .map_err(|_| StorageError::Poisoned)?
            .remove(&id);
        Ok(())
    }
}

/// One `<id>.json` file per tournament under a data directory.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Use `dir`, creating it if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, id: TournamentId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl TournamentStore for JsonFileStore {
    fn save(&self, tournament: &Tournament) -> Result<(), StorageError> {
        let path = self.path(tournament.id);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(tournament)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load(&self, id: TournamentId) -> Result<Option<Tournament>, StorageError> {
        match fs::read(self.path(id)) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&self, id: TournamentId) -> Result<(), StorageError> {
        match fs::remove_file(self.path(id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// File store under `dir`, or a memory store if the directory cannot be used.
pub fn open_store(dir: impl AsRef<Path>) -> Box<dyn TournamentStore> {
    match JsonFileStore::open(dir.as_ref()) {
        Ok(store) => {
            log::info!("Saving tournaments under {}", dir.as_ref().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!(
                "Cannot use data directory {} ({}); tournaments will not survive a restart",
                dir.as_ref().display(),
                e
            );
            Box::new(MemoryStore::default())
        }
    }
}
