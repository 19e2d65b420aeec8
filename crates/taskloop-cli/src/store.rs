//! JSON-file store backing the CLI.
//!
//! This is the storage collaborator the core expects: it supplies the full
//! task list and the login stats record, and accepts writes of both. The
//! core itself never touches the file.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use taskloop_core::{LoginStats, PomodoroConfig, Task};

const STORE_FILE: &str = "store.json";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub stats: LoginStats,
    #[serde(default = "PomodoroConfig::default")]
    pub timer: PomodoroConfig,
}

pub struct Store {
    path: PathBuf,
    pub data: StoreData,
}

impl Store {
    /// Open the store, creating an empty one when no file exists yet.
    ///
    /// The data directory comes from `TASKLOOP_DATA_DIR` when set (tests
    /// use this), otherwise the platform data dir.
    pub fn open() -> Result<Self, Box<dyn Error>> {
        let dir = match std::env::var_os("TASKLOOP_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .ok_or("could not determine data directory")?
                .join("taskloop"),
        };
        let path = dir.join(STORE_FILE);
        let data = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            StoreData::default()
        };
        Ok(Self { path, data })
    }

    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.data)?)?;
        Ok(())
    }

    pub fn find_task(&self, id: &str) -> Option<usize> {
        // Accept unique id prefixes so users can paste short ids.
        let exact = self.data.tasks.iter().position(|t| t.id == id);
        if exact.is_some() {
            return exact;
        }
        let mut matches = self
            .data
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.id.starts_with(id));
        match (matches.next(), matches.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }
}
