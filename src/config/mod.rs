use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DoctorProfile {
    pub name: String,
    pub specialty: String,
}

impl Default for DoctorProfile {
    fn default() -> Self {
        Self {
            name: "Др. Соколова".to_string(),
            specialty: "Терапевт".to_string(),
        }
    }
}

impl DoctorProfile {
    /// Avatar letters: first letter of the first two words, uppercased
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClinicProfile {
    pub name: String,
    pub tagline: String,
}

impl Default for ClinicProfile {
    fn default() -> Self {
        Self {
            name: "MediCare".to_string(),
            tagline: "Врачебная система".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub doctor: DoctorProfile,

    pub clinic: ClinicProfile,

    /// Date printed on the reminders tab
    pub today: NaiveDate,

    pub export_dir: Option<String>,

    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            doctor: DoctorProfile::default(),
            clinic: ClinicProfile::default(),
            today: NaiveDate::from_ymd_opt(2024, 11, 24).unwrap_or_default(),
            export_dir: None,
            log_level: None,
        }
    }
}

impl Config {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str::<Config>(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .as_deref()
            .and_then(expand_path)
            .or_else(|| data_dir().map(|dir| dir.join("exports")))
            .unwrap_or_else(|| PathBuf::from(".medicare").join("exports"))
    }
}

/// Load the config file. A missing file yields the defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(config_path) else {
        return Ok(Config::default());
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
            return Ok(Config::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    Config::parse(&content, &path)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("MEDICARE_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("medicare").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("medicare").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "medicare", "medicare")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("medicare"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("medicare"));
    }
    directories::ProjectDirs::from("io", "medicare", "medicare")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("medicare.log"))
}

fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            return Some(home.join(rest));
        }
    }
    Some(PathBuf::from(trimmed))
}
