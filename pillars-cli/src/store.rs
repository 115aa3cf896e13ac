//! Device-local persistence of the calculator state.
//!
//! Best-effort, last-write-wins: every mutation triggers a full-record
//! overwrite, load failures degrade to defaults, and nothing here is ever
//! fatal to the calculator itself.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, warn};

use pillars_core::ZakatInput;

/// Navigation tab last active in the app.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    Learn,
    #[default]
    Calculator,
    Wizard,
}

/// What survives across sessions: the active tab and the full input record,
/// serialized verbatim including unset markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedState {
    pub active_tab: Tab,
    pub input: ZakatInput,
}

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Platform state location, e.g. `~/.config/fivepillars/state.json`.
    pub fn default_location() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("fivepillars");
        Self::new(dir.join("state.json"))
    }

    /// Loads the saved state, degrading to defaults on any failure.
    pub fn load(&self) -> SavedState {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(state) => {
                    debug!("loaded state from {:?}", self.path);
                    state
                }
                Err(e) => {
                    warn!("unreadable state file {:?}: {e}", self.path);
                    SavedState::default()
                }
            },
            Err(_) => SavedState::default(),
        }
    }

    /// Full-record overwrite. Failures are logged and swallowed.
    pub fn save(&self, state: &SavedState) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(state) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    warn!("could not save state to {:?}: {e}", self.path);
                }
            }
            Err(e) => warn!("could not serialize state: {e}"),
        }
    }

    /// Restores all-unset defaults by removing the state file.
    pub fn reset(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("could not remove state file {:?}: {e}", self.path);
            }
        }
    }
}
