//! Persisted form settings.

mod file;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::entropy::EntropySource;
use crate::pass::ClassSet;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which form variant is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Class toggles shown; an empty selection is rejected.
    #[default]
    Classes,
    /// No toggles; every password uses the full alphabet.
    Fixed,
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormMode::Classes => write!(f, "classes"),
            FormMode::Fixed => write!(f, "fixed"),
        }
    }
}

impl FromStr for FormMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classes" => Ok(FormMode::Classes),
            "fixed" => Ok(FormMode::Fixed),
            other => Err(format!("unknown form mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub classes: ClassSet,
    pub mode: FormMode,
    pub source: EntropySource,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        let mut settings = Settings::default();
        file::load(&file::default_path(), &mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        file::save(&file::default_path(), self)
    }

    pub fn path() -> PathBuf {
        file::default_path()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 8,
            classes: ClassSet::all(),
            mode: FormMode::Classes,
            source: EntropySource::Thread,
        }
    }
}
