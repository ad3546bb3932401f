//! Simulation configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration describing the standard 5x5 table:
//!
//! ```toml
//! [table]
//! min_coordinate = 0
//! max_coordinate = 4
//!
//! [interpreter]
//! halt_on_error = false
//! ```

use crate::table::{Table, TableError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a [`SimulationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{}`", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Bounds of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    pub min_coordinate: i32,
    pub max_coordinate: i32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_coordinate: Table::DEFAULT_MIN_COORDINATE,
            max_coordinate: Table::DEFAULT_MAX_COORDINATE,
        }
    }
}

impl TableConfig {
    /// Builds the configured [`Table`].
    ///
    /// # Errors
    /// Returns [`TableError::InvalidBounds`] when the bounds are inverted.
    pub fn build(&self) -> Result<Table, TableError> {
        Table::new(self.min_coordinate, self.max_coordinate)
    }
}

/// How the command interpreter treats rejected commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpreterConfig {
    /// Stop at the first rejected command instead of logging it and carrying on.
    pub halt_on_error: bool,
}

/// Top-level configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub table: TableConfig,
    pub interpreter: InterpreterConfig,
}

impl SimulationConfig {
    /// Reads and validates a TOML config file.
    ///
    /// # Errors
    /// Fails when the file cannot be read, is not valid TOML for this schema,
    /// or describes inverted table bounds.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// See [`load`](Self::load).
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.table.build()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = SimulationConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.table.build().unwrap(), Table::default());
        assert!(!config.interpreter.halt_on_error);
    }

    #[test]
    fn partial_table_section_keeps_other_defaults() {
        let config = SimulationConfig::from_toml_str("[table]\nmax_coordinate = 9\n").unwrap();
        assert_eq!(config.table.min_coordinate, 0);
        assert_eq!(config.table.max_coordinate, 9);
    }

    #[test]
    fn inverted_bounds_fail_validation() {
        let err = SimulationConfig::from_toml_str("[table]\nmin_coordinate = 6\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Table(TableError::InvalidBounds { min: 6, max: 4 })
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = SimulationConfig::from_toml_str("[table]\nwidth = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robot.toml");
        std::fs::write(&path, "[interpreter]\nhalt_on_error = true\n").unwrap();

        let config = SimulationConfig::load(&path).unwrap();
        assert!(config.interpreter.halt_on_error);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SimulationConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
