use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::AppConfig;
use crate::error::Result;
use crate::state::SqliteStateStore;

mod dashboard_service;
mod kb_service;
mod meeting_service;

pub const STATE_DB_FILE: &str = "meethub.sqlite3";

#[derive(Clone)]
pub struct MeetHub {
    pub state: SqliteStateStore,
    root: PathBuf,
    config: AppConfig,
}

impl std::fmt::Debug for MeetHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeetHub")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl MeetHub {
    /// Opens the hub under `root_dir` with configuration read from the
    /// environment.
    pub fn open(root_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_config(root_dir, AppConfig::from_env())
    }

    pub fn open_with_config(root_dir: impl Into<PathBuf>, config: AppConfig) -> Result<Self> {
        let root = root_dir.into();
        fs::create_dir_all(&root)?;
        let state = SqliteStateStore::open(root.join(STATE_DB_FILE))?;
        Ok(Self {
            state,
            root,
            config,
        })
    }

    /// Seeds the default article catalog into an empty knowledge base unless
    /// seeding is disabled. Returns the number of articles written.
    pub fn initialize(&self) -> Result<usize> {
        if !self.config.seed_kb {
            info!(root = %self.root.display(), "knowledge base seeding disabled");
            return Ok(0);
        }
        let seeded = self.state.seed_default_articles()?;
        info!(root = %self.root.display(), seeded, "initialized meeting hub");
        Ok(seeded)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests;
