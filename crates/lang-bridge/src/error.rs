use lang_bridge_core::LangError;
use thiserror::Error;

/// Errors raised while installing the plugin.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error(transparent)]
    Lang(#[from] LangError),
    #[cfg(feature = "toml")]
    #[error(transparent)]
    Config(#[from] lang_bridge_toml::LangConfigError),
    #[error("Failed to walk locale directory: {0}")]
    Discovery(#[from] walkdir::Error),
    #[error("Invalid global translations key '{0}', expected only [A-Za-z0-9_-]")]
    InvalidGlobalTranslationsKey(String),
}
