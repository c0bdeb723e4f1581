#![doc = include_str!("../README.md")]

pub mod catalogue;
pub mod error;
pub mod fallback;
pub mod ignore;
pub mod lang;
pub mod locale_path;
pub mod messages;
pub mod php;
pub mod plural;
pub mod resource;
pub mod translator;

pub use catalogue::{
    Catalogue, CatalogueBuilder, DEFAULT_GLOBAL_DOMAIN, UnrecognizedPolicy, build,
};
pub use error::{LangError, ResourceError};
pub use ignore::IgnoreList;
pub use lang::{DEFAULT_LOCALE, Lang};
pub use locale_path::LocalePath;
pub use messages::{Message, Messages};
pub use resource::{LocaleFile, ResourceFormat, parse_resource};
pub use translator::{Replacements, Translator, apply_replacements};
