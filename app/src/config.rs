use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const CONFIG_FILE_NAME: &str = "lasw.toml";
pub const LASTOOLS_PATH_ENV: &str = "LASTOOLS_PATH";

#[cfg(windows)]
const DEFAULT_LASTOOLS_PATH: &str = "C:\\LAStools";
#[cfg(not(windows))]
const DEFAULT_LASTOOLS_PATH: &str = "/opt/LAStools";

/// Settings read from `lasw.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// LAStools installation root or its `bin` directory.
    pub lastools_path: PathBuf,
    /// Directory holding the `<topic>.txt` documentation files.
    pub docs_dir: PathBuf,
    pub ground_step: f64,
    pub dem_step: f64,
    /// Default sun position for hillshades.
    pub azimuth: f64,
    pub altitude: f64,
    pub radius: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lastools_path: PathBuf::from(DEFAULT_LASTOOLS_PATH),
            docs_dir: PathBuf::from("docs"),
            ground_step: 5.0,
            dem_step: 1.0,
            azimuth: 315.0,
            altitude: 45.0,
            radius: 1.0,
        }
    }
}

impl AppConfig {
    /// Loads `explicit` when given, otherwise `./lasw.toml` if present,
    /// otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let local = PathBuf::from(CONFIG_FILE_NAME);
                if !local.is_file() {
                    log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
                local
            }
        };

        log::debug!("loading config from {}", path.display());
        let content = fs::read_to_string(&path).map_err(|source| AppError::ReadConfig {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| AppError::ParseConfig { path, source })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// `LASTOOLS_PATH` wins over the file.
    pub fn with_env_override(mut self, value: Option<OsString>) -> Self {
        if let Some(path) = value.filter(|v| !v.is_empty()) {
            self.lastools_path = PathBuf::from(path);
        }
        self
    }

    pub fn with_lastools_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.lastools_path = path;
        }
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.ground_step.is_finite() && self.ground_step > 0.0) {
            return Err(AppError::InvalidConfig(format!(
                "ground_step must be greater than 0, got {}",
                self.ground_step
            )));
        }
        if !(self.dem_step.is_finite() && self.dem_step > 0.0) {
            return Err(AppError::InvalidConfig(format!(
                "dem_step must be greater than 0, got {}",
                self.dem_step
            )));
        }
        if !(0.0..=90.0).contains(&self.altitude) {
            return Err(AppError::InvalidConfig(format!(
                "altitude must be between 0 and 90, got {}",
                self.altitude
            )));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(AppError::InvalidConfig(format!(
                "radius must be greater than 0, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config = AppConfig::from_toml_str("lastools_path = 'D:/lastools'\nground_step = 2.5\n")
            .unwrap();
        assert_eq!(config.lastools_path, PathBuf::from("D:/lastools"));
        assert_eq!(config.ground_step, 2.5);
        assert_eq!(config.dem_step, 1.0);
        assert_eq!(config.docs_dir, PathBuf::from("docs"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert!(AppConfig::from_toml_str("ground_step = 'five'").is_err());
    }

    #[test]
    fn load_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "azimuth = 270.0\naltitude = 30.0\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.azimuth, 270.0);
        assert_eq!(config.altitude, 30.0);
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, AppError::ReadConfig { .. }));
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "radius = [").unwrap();
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, AppError::ParseConfig { path: ref p, .. } if p == &path));
    }

    #[test]
    fn env_and_flag_override_in_order() {
        let config = AppConfig::default()
            .with_env_override(Some(OsString::from("/env/lastools")))
            .with_lastools_path(None);
        assert_eq!(config.lastools_path, PathBuf::from("/env/lastools"));

        let config = config.with_lastools_path(Some(PathBuf::from("/flag/lastools")));
        assert_eq!(config.lastools_path, PathBuf::from("/flag/lastools"));

        let unchanged = AppConfig::default().with_env_override(Some(OsString::new()));
        assert_eq!(unchanged, AppConfig::default());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = AppConfig {
            altitude: 120.0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            ground_step: 0.0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
