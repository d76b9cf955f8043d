//! Loading the configuration file, which holds the default password options.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::ProgError;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) defaults: pwgen::PasswordOptions,
}

impl Config {
    /// Load the configuration from the given path, or from the default location.
    pub(crate) fn load(explicit_path: Option<PathBuf>) -> Result<Config, ProgError> {
        Self::load_from(explicit_path, default_config_path())
    }

    /// A file at `default_path` is optional; a file the user pointed us at is not.
    fn load_from(
        explicit_path: Option<PathBuf>,
        default_path: Option<PathBuf>,
    ) -> Result<Config, ProgError> {
        match (explicit_path, default_path) {
            (Some(path), _) => match Self::read(&path)? {
                Some(config) => Ok(config),
                None => Err(ProgError::ConfigNotFound(path)),
            },
            (None, Some(path)) => Ok(Self::read(&path)?.unwrap_or_default()),
            (None, None) => {
                log::debug!("HOME is not set; using built-in defaults");
                Ok(Config::default())
            }
        }
    }

    fn read(path: &Path) -> Result<Option<Config>, ProgError> {
        let data = match fs::read_to_string(path) {
            Ok(d) => d,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no configuration file at {}", path.display());
                return Ok(None);
            }
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!(
                        "failed to read configuration file {}",
                        path.display()
                    ))
                    .into())
            }
        };
        log::info!("loading configuration from {}", path.display());
        Self::parse(&data)
            .map(Some)
            .map_err(|err| ProgError::ConfigInvalid(path.to_owned(), err))
    }

    fn parse(data: &str) -> Result<Config, serde_yaml::Error> {
        // An empty file is a valid, empty configuration.
        if data.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(data)
    }
}

fn default_config_path() -> Option<PathBuf> {
    let home = env::var_os("HOME")?;
    let mut p = PathBuf::from(home);
    p.push(".config");
    p.push("pwgen");
    p.push("config.yaml");
    Some(p)
}

pub(crate) fn print_defaults(config: &Config) -> Result<(), ProgError> {
    let stdout = io::stdout().lock();
    serde_yaml::to_writer(stdout, config).context("failed to write defaults as YAML to stdout")?;
    io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_defaults_fill_in() {
        let config = Config::parse("defaults:\n  length: 20\n  include_symbols: true\n").unwrap();
        assert_eq!(config.defaults.length, 20);
        assert!(config.defaults.include_symbols);
        assert!(config.defaults.include_lowercase);
    }

    #[test]
    fn empty_file_is_default() {
        let config = Config::parse("\n").unwrap();
        assert_eq!(config.defaults, pwgen::PasswordOptions::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("defualts:\n  length: 20\n").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        match Config::load(Some(path.clone())) {
            Err(ProgError::ConfigNotFound(p)) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn explicit_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "defaults:\n  length: 7\n  include_uppercase: false").unwrap();
        let config = Config::load(Some(file.path().to_owned())).unwrap();
        assert_eq!(config.defaults.length, 7);
        assert!(!config.defaults.include_uppercase);
    }

    #[test]
    fn missing_default_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("config.yaml");
        let config = Config::load_from(None, Some(default_path)).unwrap();
        assert_eq!(config.defaults, pwgen::PasswordOptions::default());
    }

    #[test]
    fn no_home_is_default() {
        let config = Config::load_from(None, None).unwrap();
        assert_eq!(config.defaults, pwgen::PasswordOptions::default());
    }

    #[test]
    fn default_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("config.yaml");
        fs::write(&default_path, "defaults:\n  include_symbols: true\n").unwrap();
        let config = Config::load_from(None, Some(default_path)).unwrap();
        assert!(config.defaults.include_symbols);
    }

    #[test]
    fn explicit_path_wins_over_default() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("config.yaml");
        fs::write(&default_path, "defaults:\n  length: 20\n").unwrap();
        let explicit = dir.path().join("missing.yaml");
        match Config::load_from(Some(explicit.clone()), Some(default_path)) {
            Err(ProgError::ConfigNotFound(p)) => assert_eq!(p, explicit),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
