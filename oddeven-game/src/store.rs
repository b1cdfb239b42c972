use crate::engine::GameEngine;
use crate::error::{GameError, OddEvenError, Result};
use crate::types::GameRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Identifies one engine lifetime, from deploy until it is replaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: Uuid,
    pub deployed_at: DateTime<Utc>,
}

impl Deployment {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            deployed_at: Utc::now(),
        }
    }
}

/// On-disk form of a deployed engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub deployment: Deployment,
    pub current: GameRecord,
    pub last: GameRecord,
}

impl Snapshot {
    fn capture(deployment: &Deployment, engine: &GameEngine) -> Self {
        Self {
            deployment: deployment.clone(),
            current: engine.game_data(),
            last: engine.last_game_data(),
        }
    }
}

/// File backed home of a [`GameEngine`].
///
/// Calls go through [`GameStore::transact`], which commits the new state
/// only when the operation succeeds. A rejected call leaves memory and disk
/// as they were.
///
/// There is no file lock. Two processes that open the same file and both
/// transact will each write a whole snapshot, and the later rename wins;
/// callers must run one transaction at a time per state file.
#[derive(Debug)]
pub struct GameStore {
    path: PathBuf,
    deployment: Deployment,
    engine: GameEngine,
}

impl GameStore {
    /// Deploy a fresh engine at `path`
    pub async fn deploy(path: impl AsRef<Path>, overwrite: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !overwrite && tokio::fs::try_exists(&path).await? {
            return Err(OddEvenError::AlreadyDeployed { path });
        }

        let store = Self {
            path,
            deployment: Deployment::new(),
            engine: GameEngine::new(),
        };
        store
            .write(&Snapshot::capture(&store.deployment, &store.engine))
            .await?;

        tracing::info!(
            "Deployed game {} at {}",
            store.deployment.id,
            store.path.display()
        );
        Ok(store)
    }

    /// Load a previously deployed engine
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(OddEvenError::NotDeployed { path });
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: Snapshot = serde_json::from_str(&content)?;
        tracing::debug!(
            "Loaded game {} from {}",
            snapshot.deployment.id,
            path.display()
        );

        Ok(Self {
            path,
            deployment: snapshot.deployment,
            engine: GameEngine::from_records(snapshot.current, snapshot.last)?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Run one operation against the engine and persist the result.
    ///
    /// The operation works on a copy; the copy replaces the live engine only
    /// after it has been written to disk.
    pub async fn transact<T, F>(&mut self, op: F) -> Result<T>
    where
        F: FnOnce(&mut GameEngine) -> std::result::Result<T, GameError>,
    {
        let mut next = self.engine.clone();
        let output = op(&mut next)?;

        self.write(&Snapshot::capture(&self.deployment, &next))
            .await?;
        self.engine = next;

        Ok(output)
    }

    /// Write through a sibling temp file so readers never see a torn file
    async fn write(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(snapshot)?;
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, content).await?;

        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        tracing::debug!("Saved game state to {}", self.path.display());
        Ok(())
    }

    /// Unique per write, so concurrent writers never share a temp file
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}.tmp", Uuid::new_v4().simple()));
        PathBuf::from(name)
    }
}
