#![doc = include_str!("../README.md")]

pub mod build;

use fs_err as fs;
use lang_bridge_core::locale_path::is_identifier;
use lang_bridge_core::{DEFAULT_GLOBAL_DOMAIN, IgnoreList, LocalePath, UnrecognizedPolicy};
use serde::{Deserialize, Serialize};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// Name of the configuration file looked up in a crate's manifest directory.
pub const CONFIG_FILE_NAME: &str = "lang.toml";

#[derive(Debug, Error)]
pub enum LangConfigError {
    /// Configuration file not found.
    #[error("lang.toml configuration file not found")]
    NotFound,
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The fallback locale is not a valid language identifier.
    #[error("Invalid fallback locale '{name}'")]
    InvalidFallbackLocale {
        name: String,
        #[source]
        source: LanguageIdentifierError,
    },
    /// A locale found in the assets directory or configuration is not valid.
    #[error("Invalid locale '{name}'")]
    InvalidLocale {
        name: String,
        #[source]
        source: LanguageIdentifierError,
    },
    /// The global domain name contains characters other than `[A-Za-z0-9_-]`.
    #[error("Invalid global_translations_key '{0}', expected only [A-Za-z0-9_-]")]
    InvalidGlobalTranslationsKey(String),
}

/// The configuration for `lang-bridge`.
///
/// ```toml
/// fallback_locale = "en"
/// assets_dir = "lang"
///
/// [ignore]
/// fr = ["admin"]
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LangConfig {
    /// Locale used when a message is missing in the requested one (e.g. "en").
    pub fallback_locale: String,
    /// Locale selected at startup. Defaults to the fallback locale.
    #[serde(default)]
    pub locale: Option<String>,
    /// Path to the directory containing locale files.
    /// Expected structure: `{assets_dir}/{locale}.json` and `{assets_dir}/{locale}/{domain}.php`.
    pub assets_dir: PathBuf,
    /// Domain name for root-level locale files. Limited to `[A-Za-z0-9_-]`,
    /// since the first `.` of a key separates the domain.
    #[serde(default = "default_global_translations_key")]
    pub global_translations_key: String,
    /// Scoped domains to leave out, per locale.
    #[serde(default)]
    pub ignore: IgnoreList,
    /// Handling of files that match neither layout.
    #[serde(default)]
    pub unrecognized: UnrecognizedPolicy,
}

fn default_global_translations_key() -> String {
    DEFAULT_GLOBAL_DOMAIN.to_string()
}

impl LangConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LangConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LangConfigError::NotFound);
        }

        let content = fs::read_to_string(path)?;
        let config: LangConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// Reads the configuration from the manifest directory.
    pub fn read_from_manifest_dir() -> Result<Self, LangConfigError> {
        let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| LangConfigError::NotFound)?;
        Self::from_manifest_dir(Path::new(&manifest_dir))
    }

    /// Reads `lang.toml` from the given manifest directory.
    pub fn from_manifest_dir(manifest_dir: &Path) -> Result<Self, LangConfigError> {
        Self::read_from_path(manifest_dir.join(CONFIG_FILE_NAME))
    }

    /// Returns the path to the assets directory from the manifest directory.
    pub fn assets_dir_from_manifest(&self) -> Result<PathBuf, LangConfigError> {
        self.assets_dir_from_base(None)
    }

    /// Returns the path to the assets directory from a base directory.
    /// If `base_dir` is `None`, uses `CARGO_MANIFEST_DIR` environment variable.
    pub fn assets_dir_from_base(&self, base_dir: Option<&Path>) -> Result<PathBuf, LangConfigError> {
        let base = match base_dir {
            Some(dir) => dir.to_path_buf(),
            None => {
                let manifest_dir =
                    env::var("CARGO_MANIFEST_DIR").map_err(|_| LangConfigError::NotFound)?;
                PathBuf::from(manifest_dir)
            },
        };

        Ok(base.join(&self.assets_dir))
    }

    /// Returns the configured fallback locale as a `LanguageIdentifier`.
    pub fn fallback_locale_identifier(&self) -> Result<LanguageIdentifier, LangConfigError> {
        self.fallback_locale
            .parse::<LanguageIdentifier>()
            .map_err(|source| LangConfigError::InvalidFallbackLocale {
                name: self.fallback_locale.clone(),
                source,
            })
    }

    /// The locale selected at startup.
    pub fn initial_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(&self.fallback_locale)
    }

    /// Validates the startup locale, if one is configured.
    pub fn locale_identifier(&self) -> Result<LanguageIdentifier, LangConfigError> {
        match &self.locale {
            Some(locale) => parse_locale(locale),
            None => self.fallback_locale_identifier(),
        }
    }

    /// Returns the locales available under the assets directory.
    ///
    /// Both locale directories (`en/`) and root-level locale files (`en.json`)
    /// count. The result is sorted and deduplicated.
    pub fn available_locales_from_base(
        &self,
        base_dir: Option<&Path>,
    ) -> Result<Vec<String>, LangConfigError> {
        let assets_path = self.assets_dir_from_base(base_dir)?;
        let mut locales = Vec::new();

        for entry in fs::read_dir(&assets_path)? {
            let entry = entry?;
            let name = entry.file_name().into_string().map_err(|raw| {
                LangConfigError::ReadError(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Assets directory contains a non UTF-8 entry: {:?}", raw),
                ))
            })?;

            let locale = if entry.file_type()?.is_dir() {
                name
            } else {
                match LocalePath::classify(&name) {
                    LocalePath::Global { locale, .. } => locale,
                    _ => continue,
                }
            };

            parse_locale(&locale)?;
            locales.push(locale);
        }

        locales.sort();
        locales.dedup();
        Ok(locales)
    }

    /// Checks everything an install relies on: both locales, the global
    /// domain name and the assets directory.
    pub fn validate(&self, base_dir: Option<&Path>) -> Result<(), LangConfigError> {
        self.fallback_locale_identifier()?;
        self.locale_identifier()?;

        if !is_identifier(&self.global_translations_key) {
            return Err(LangConfigError::InvalidGlobalTranslationsKey(
                self.global_translations_key.clone(),
            ));
        }

        self.validate_assets_dir(base_dir)
    }

    /// Validates the assets directory.
    pub fn validate_assets_dir(&self, base_dir: Option<&Path>) -> Result<(), LangConfigError> {
        let assets_path = self.assets_dir_from_base(base_dir)?;

        if !assets_path.exists() {
            return Err(LangConfigError::ReadError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Assets directory '{}' does not exist", assets_path.display()),
            )));
        }

        if !assets_path.is_dir() {
            return Err(LangConfigError::ReadError(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Assets path '{}' is not a directory", assets_path.display()),
            )));
        }

        Ok(())
    }
}

fn parse_locale(name: &str) -> Result<LanguageIdentifier, LangConfigError> {
    name.parse::<LanguageIdentifier>()
        .map_err(|source| LangConfigError::InvalidLocale {
            name: name.to_string(),
            source,
        })
}
