use std::{fs, path::PathBuf};

use clap::ValueEnum;
use mazecore::algorithms::Strategy;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

use crate::{app::AppError, constants::base_path};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub columns: Option<i32>,
    #[serde(default)]
    pub rows: Option<i32>,
    #[serde(default)]
    pub delay_ms: Option<u64>,
    #[serde(default)]
    pub animate: Option<bool>,
    #[serde(default)]
    pub strategy: Option<Strategy>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_columns(&self) -> i32 {
        self.columns.unwrap_or(10)
    }

    pub fn get_rows(&self) -> i32 {
        self.rows.unwrap_or(6)
    }

    pub fn get_delay_ms(&self) -> u64 {
        self.delay_ms.unwrap_or(50)
    }

    pub fn get_animate(&self) -> bool {
        self.animate.unwrap_or(true)
    }

    pub fn get_strategy(&self) -> Strategy {
        self.strategy.unwrap_or_default()
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn default_path() -> Result<PathBuf, AppError> {
        Ok(base_path()
            .ok_or(AppError::NoConfigDir)?
            .join("settings.ron"))
    }

    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(text)
    }

    /// Reads the settings file, writing the default one first if there is none.
    pub fn load(path: PathBuf) -> Result<Self, AppError> {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Self::reset_config(path.clone())?;
                DEFAULT_SETTINGS.to_string()
            }
            Err(err) => return Err(err.into()),
        };

        Self::from_ron(&text).map_err(|source| AppError::Settings { path, source })
    }

    pub fn reset_config(path: PathBuf) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, DEFAULT_SETTINGS)?;
        log::info!("Wrote default settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_matches_defaults() {
        let settings = Settings::from_ron(DEFAULT_SETTINGS).unwrap();
        let empty = Settings::new();

        assert_eq!(settings.get_columns(), empty.get_columns());
        assert_eq!(settings.get_rows(), empty.get_rows());
        assert_eq!(settings.get_delay_ms(), empty.get_delay_ms());
        assert_eq!(settings.get_animate(), empty.get_animate());
        assert_eq!(settings.get_strategy(), empty.get_strategy());
        assert_eq!(settings.get_log_level(), empty.get_log_level());
    }

    #[test]
    fn partial_file() {
        let settings = Settings::from_ron("(columns: 30, strategy: Recursive)").unwrap();
        assert_eq!(settings.get_columns(), 30);
        assert_eq!(settings.get_rows(), 6);
        assert_eq!(settings.get_strategy(), Strategy::Recursive);
    }

    #[test]
    fn broken_file() {
        assert!(Settings::from_ron("(columns: \"wide\")").is_err());
    }

    #[test]
    fn load_creates_default() {
        let path = std::env::temp_dir()
            .join(format!("mazesolver-test-{}", std::process::id()))
            .join("settings.ron");
        let _ = fs::remove_file(&path);

        let settings = Settings::load(path.clone()).unwrap();
        assert!(path.exists());
        assert_eq!(settings.get_columns(), 10);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
