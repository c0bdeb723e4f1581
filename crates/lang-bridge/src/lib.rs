#![doc = include_str!("../README.md")]

pub mod discovery;
mod error;
pub mod facade;
pub mod global;
mod options;
mod plugin;

pub use error::InstallError;
pub use facade::{I18n, is_qualified_key};
pub use options::LangOptions;
pub use plugin::{I18nHost, LangPlugin};

pub use lang_bridge_core::{
    Catalogue, CatalogueBuilder, DEFAULT_GLOBAL_DOMAIN, DEFAULT_LOCALE, IgnoreList, Lang,
    LangError, LocaleFile, LocalePath, Message, Messages, Replacements, ResourceError,
    ResourceFormat, Translator, UnrecognizedPolicy,
};

#[cfg(feature = "toml")]
pub use lang_bridge_toml;

#[doc(hidden)]
pub use inventory as __inventory;

#[doc(hidden)]
pub use lang_bridge_core as __core;
