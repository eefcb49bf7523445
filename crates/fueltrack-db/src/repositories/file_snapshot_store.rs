//! JSON-file implementation of the `SnapshotStore` trait.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use fueltrack_core::{RepositoryError, SnapshotSlot, SnapshotStore};

/// Stores each slot as `<dir>/<key>.json`.
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so a slot file is always either the old or the new content. A multi-slot
/// commit stages every temp file before renaming any of them and restores
/// already-replaced slots from backups if a later rename fails.
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `slot`.
    pub fn slot_path(&self, slot: SnapshotSlot) -> PathBuf {
        self.dir.join(format!("{}.json", slot.key()))
    }
}

fn io_error(path: &Path, err: &std::io::Error) -> RepositoryError {
    RepositoryError::Storage(format!("{}: {err}", path.display()))
}

/// One slot of an in-flight commit.
struct Staged {
    path: PathBuf,
    tmp: PathBuf,
    backup: Option<PathBuf>,
}

impl Staged {
    fn new(path: PathBuf) -> Self {
        let tmp = path.with_extension("json.tmp");
        Self {
            path,
            tmp,
            backup: None,
        }
    }

    /// Write the temp file and back up the current target, if any.
    async fn stage(&mut self, bytes: &[u8]) -> Result<(), RepositoryError> {
        fs::write(&self.tmp, bytes)
            .await
            .map_err(|e| io_error(&self.tmp, &e))?;
        match fs::metadata(&self.path).await {
            Ok(_) => {
                let backup = self.path.with_extension("json.bak");
                fs::copy(&self.path, &backup)
                    .await
                    .map_err(|e| io_error(&self.path, &e))?;
                self.backup = Some(backup);
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(&self.path, &err)),
        }
    }

    async fn discard(&self) {
        let _ = fs::remove_file(&self.tmp).await;
        if let Some(backup) = &self.backup {
            let _ = fs::remove_file(backup).await;
        }
    }

    /// Put the pre-commit content back after the temp file was renamed in.
    ///
    /// On failure the backup is left on disk next to the slot.
    async fn restore(&self) {
        let result = match &self.backup {
            Some(backup) => fs::rename(backup, &self.path).await,
            None => fs::remove_file(&self.path).await,
        };
        if let Err(err) = result {
            tracing::warn!(path = %self.path.display(), error = %err, "Failed to restore snapshot slot");
        }
    }
}

async fn discard_all(staged: &[Staged]) {
    for entry in staged {
        entry.discard().await;
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn read(&self, slot: SnapshotSlot) -> Result<Option<Vec<u8>>, RepositoryError> {
        let path = self.slot_path(slot);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(&path, &err)),
        }
    }

    async fn write(&self, slot: SnapshotSlot, bytes: &[u8]) -> Result<(), RepositoryError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_error(&self.dir, &e))?;

        let path = self.slot_path(slot);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes)
            .await
            .map_err(|e| io_error(&tmp, &e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_error(&path, &e))?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote snapshot slot");
        Ok(())
    }

    async fn commit(&self, writes: &[(SnapshotSlot, Vec<u8>)]) -> Result<(), RepositoryError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_error(&self.dir, &e))?;

        let mut staged: Vec<Staged> = Vec::with_capacity(writes.len());
        for (slot, bytes) in writes {
            let mut entry = Staged::new(self.slot_path(*slot));
            if let Err(err) = entry.stage(bytes).await {
                entry.discard().await;
                discard_all(&staged).await;
                return Err(err);
            }
            staged.push(entry);
        }

        for (done, entry) in staged.iter().enumerate() {
            if let Err(err) = fs::rename(&entry.tmp, &entry.path).await {
                let err = io_error(&entry.path, &err);
                for applied in staged[..done].iter().rev() {
                    applied.restore().await;
                }
                discard_all(&staged[done..]).await;
                return Err(err);
            }
        }
        discard_all(&staged).await;

        tracing::debug!(dir = %self.dir.display(), slots = writes.len(), "Committed snapshot slots");
        Ok(())
    }
}
