//! Simulation tuning knobs
//!
//! Persisted as plain JSON next to the host binary. Every field has a
//! default, so a missing or stale file never stops a demo from running.

use std::fs;
use std::io;
use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Host-adjustable simulation balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Gravity handed to scenario-built bodies (y up, so negative y falls)
    pub gravity: DVec2,
    /// Scene restitution for the elastic scenarios
    pub restitution: f64,
    /// Scenario seed used when the host does not pass one
    pub seed: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: DVec2::new(0.0, -900.0),
            restitution: 1.0,
            seed: 7,
        }
    }
}

impl Tuning {
    /// Load from a JSON file, falling back to defaults on any read or
    /// parse failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(err) => {
                log::warn!("Using default tuning, {} unusable: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(io::Error::other)
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
