//! Settings file persistence.
//!
//! One line: `length,letters,digits,special,mode,source`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::{Settings, SettingsError};
use crate::pass::{CharacterClass, MAX_LENGTH, MIN_LENGTH};

const FIELDS: usize = 6;

pub fn save(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(io_err)?;

    file.write_all(encode(settings).as_bytes()).map_err(io_err)?;
    log::info!("saved settings to {}", path.display());
    Ok(())
}

pub fn load(path: &Path, settings: &mut Settings) -> Result<(), SettingsError> {
    if !path.exists() {
        log::debug!("no settings at {}, writing defaults", path.display());
        return save(path, settings);
    }

    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    if !decode(line.trim(), settings) {
        log::warn!("malformed settings at {}, resetting", path.display());
        *settings = Settings::default();
        save(path, settings)?;
    }

    Ok(())
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passgen/settings")
}

fn encode(settings: &Settings) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        settings.length,
        settings.classes.contains(CharacterClass::Letters),
        settings.classes.contains(CharacterClass::Digits),
        settings.classes.contains(CharacterClass::Special),
        settings.mode,
        settings.source,
    )
}

/// Apply a settings line. Returns false if the line has the wrong shape;
/// individual fields that fail to parse keep their current value.
fn decode(line: &str, settings: &mut Settings) -> bool {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return false;
    }

    settings.length = parts[0]
        .parse::<usize>()
        .unwrap_or(settings.length)
        .clamp(MIN_LENGTH, MAX_LENGTH);

    for (class, part) in CharacterClass::ALL.into_iter().zip(&parts[1..4]) {
        let enabled = part.parse().unwrap_or(settings.classes.contains(class));
        settings.classes.set(class, enabled);
    }

    settings.mode = parts[4].parse().unwrap_or(settings.mode);
    settings.source = parts[5].parse().unwrap_or(settings.source);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::EntropySource;
    use crate::pass::ClassSet;
    use crate::settings::FormMode;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");
        let mut settings = Settings::default();
        load(&path, &mut settings).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "8,true,true,true,classes,thread\n");
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let saved = Settings {
            length: 20,
            classes: ClassSet::only(CharacterClass::Digits),
            mode: FormMode::Fixed,
            source: EntropySource::Os,
        };
        save(&path, &saved).unwrap();

        let mut loaded = Settings::default();
        load(&path, &mut loaded).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn malformed_file_resets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "garbage\n").unwrap();

        let mut settings = Settings {
            length: 30,
            ..Settings::default()
        };
        load(&path, &mut settings).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), encode(&Settings::default()));
    }

    #[test]
    fn bad_fields_keep_defaults() {
        let mut settings = Settings::default();
        assert!(decode("abc,false,maybe,true,sideways,os", &mut settings));
        assert_eq!(settings.length, 8);
        assert!(!settings.classes.contains(CharacterClass::Letters));
        assert!(settings.classes.contains(CharacterClass::Digits));
        assert_eq!(settings.mode, FormMode::Classes);
        assert_eq!(settings.source, EntropySource::Os);
    }

    #[test]
    fn length_is_clamped_on_load() {
        let mut settings = Settings::default();
        assert!(decode("99,true,true,true,classes,thread", &mut settings));
        assert_eq!(settings.length, MAX_LENGTH);
        assert!(decode("2,true,true,true,classes,thread", &mut settings));
        assert_eq!(settings.length, MIN_LENGTH);
    }
}
