use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::direction::Direction;
use crate::model::mapping::{AppMapping, DirectionMap, MappingStore};
use crate::sys::event::Modifiers;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize config")]
    Serialize(#[from] toml::ser::Error),
    #[error("no config directory available on this system")]
    NoConfigDir,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub mappings: DirectionMap,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub modifier: ModifierKey,
    #[serde(default)]
    pub gesture: GestureSettings,
    #[serde(default)]
    pub overlay: OverlaySettings,
}

/// The key that has to be held for a drag to count as a gesture.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKey {
    #[default]
    Option,
    Command,
    Control,
    Shift,
}

impl ModifierKey {
    pub fn flag(self) -> Modifiers {
        match self {
            ModifierKey::Option => Modifiers::OPTION,
            ModifierKey::Command => Modifiers::COMMAND,
            ModifierKey::Control => Modifiers::CONTROL,
            ModifierKey::Shift => Modifiers::SHIFT,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GestureSettings {
    /// Drags shorter than this many points are ignored.
    #[serde(default = "default_min_drag_distance")]
    pub min_drag_distance: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            min_drag_distance: default_min_drag_distance(),
        }
    }
}

fn default_min_drag_distance() -> f64 { 8.0 }

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OverlaySettings {
    #[serde(default = "yes")]
    pub enabled: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self { Self { enabled: true } }
}

fn yes() -> bool { true }

impl Config {
    /// `$XDG_CONFIG_HOME/compass/config.toml` or the platform equivalent.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let mut path = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        path.push("compass");
        path.push("config.toml");
        Ok(path)
    }

    pub fn parse(contents: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        Ok(config.validated())
    }

    pub fn read(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Config::parse(&contents)
    }

    /// Like [`Config::read`], but a missing file yields the defaults.
    pub fn read_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Config::read(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
            other => other,
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> { Ok(toml::to_string_pretty(self)?) }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        let write_err = |source| ConfigError::Write { path: path.to_owned(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, contents).map_err(write_err)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    pub fn assign(&mut self, direction: Direction, app: AppMapping) -> Option<AppMapping> {
        self.mappings.assign(direction, app)
    }

    fn validated(mut self) -> Config {
        let distance = self.settings.gesture.min_drag_distance;
        if !distance.is_finite() || distance < 0.0 {
            warn!(distance, "min_drag_distance must be a finite, non-negative number; using 0");
            self.settings.gesture.min_drag_distance = 0.0;
        }
        self
    }
}

impl MappingStore for Config {
    fn lookup(&self, direction: Direction) -> Option<&AppMapping> { self.mappings.lookup(direction) }
}
