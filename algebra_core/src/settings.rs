//! # Settings
//!
//! Learner-facing configuration stored as human-readable JSON:
//! - **Atomic saves**: write to a `.tmp` sibling, sync, rename
//! - **Version validation**: refuse files written by a newer schema
//!
//! ## Example
//!
//! ```rust,no_run
//! use algebra_core::settings::{load_settings, save_settings, Settings};
//! use std::path::Path;
//!
//! let mut settings = Settings::default();
//! settings.hint_threshold = 2;
//! save_settings(&settings, Path::new("equilab.json"))?;
//!
//! let loaded = load_settings(Path::new("equilab.json"))?;
//! assert_eq!(loaded.hint_threshold, 2);
//! # Ok::<(), algebra_core::errors::AlgebraError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::checker::{AnswerChecker, DEFAULT_TOLERANCE};
use crate::equations::{Difficulty, EquationType};
use crate::errors::{AlgebraError, AlgebraResult};
use crate::session::DEFAULT_HINT_THRESHOLD;

/// Current schema version for settings files
pub const SETTINGS_VERSION: &str = "0.1.0";

/// Practice configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Schema version of the file
    pub version: String,

    /// Absolute tolerance for answer comparison
    pub tolerance: f64,

    /// Category offered when a session starts
    pub default_category: EquationType,

    /// Tier offered when a session starts
    pub default_difficulty: Difficulty,

    /// Failed attempts before a hint is shown (0 = never)
    pub hint_threshold: u32,

    /// When the file was last written
    pub modified: DateTime<Utc>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: SETTINGS_VERSION.to_string(),
            tolerance: DEFAULT_TOLERANCE,
            default_category: EquationType::Polynomial,
            default_difficulty: Difficulty::Basic,
            hint_threshold: DEFAULT_HINT_THRESHOLD,
            modified: Utc::now(),
        }
    }
}

impl Settings {
    /// Checker configured with this tolerance
    pub fn checker(&self) -> AnswerChecker {
        AnswerChecker::new().with_tolerance(self.tolerance)
    }

    /// Reject values no session could use.
    pub fn validate(&self) -> AlgebraResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(AlgebraError::invalid_input(
                "tolerance",
                self.tolerance.to_string(),
                "Tolerance must be a positive number",
            ));
        }
        if self.tolerance >= 0.5 {
            return Err(AlgebraError::invalid_input(
                "tolerance",
                self.tolerance.to_string(),
                "Tolerance this large would accept neighbouring integers",
            ));
        }
        Ok(())
    }
}

/// Save settings with an atomic write.
pub fn save_settings(settings: &Settings, path: &Path) -> AlgebraResult<()> {
    settings.validate()?;

    let mut stamped = settings.clone();
    stamped.modified = Utc::now();

    let json = serde_json::to_string_pretty(&stamped).map_err(|e| AlgebraError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        AlgebraError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        AlgebraError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        AlgebraError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        AlgebraError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load settings from a file.
///
/// # Returns
///
/// * `Err(AlgebraError::VersionMismatch)` - file written by a newer schema
/// * `Err(AlgebraError::SerializationError)` - invalid JSON
/// * `Err(AlgebraError::FileError)` - I/O error
/// * `Err(AlgebraError::InvalidInput)` - values out of range
pub fn load_settings(path: &Path) -> AlgebraResult<Settings> {
    let mut file = File::open(path).map_err(|e| {
        AlgebraError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        AlgebraError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings: Settings = serde_json::from_str(&contents).map_err(|e| AlgebraError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&settings.version)?;
    settings.validate()?;

    Ok(settings)
}

/// Load settings, falling back to defaults (with a warning) on any error.
pub fn load_settings_or_default(path: &Path) -> Settings {
    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("using default settings: {}", e);
            Settings::default()
        }
    }
}

/// Major versions must match; for 0.x the file's minor may not be newer.
fn validate_version(file_version: &str) -> AlgebraResult<()> {
    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version);
    let current_parts = parse(SETTINGS_VERSION);

    let mismatch = || AlgebraError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SETTINGS_VERSION.to_string(),
    };

    if file_parts.is_empty() || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    if current_parts[0] == 0 && file_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
