//! Locale file discovery.
//!
//! Locale files reach the catalogue in one of two ways:
//!
//! - embedded into the binary with [`rust_embed`] and registered through
//!   [`register_locale_assets!`](crate::register_locale_assets), or
//! - read from a directory at runtime with [`read_dir`].
//!
//! Either way only `.json` and `.php` files are picked up. Paths are reported
//! relative to the source root with forward slashes.

use crate::error::InstallError;
use fs_err as fs;
use lang_bridge_core::{LangError, LocaleFile, ResourceFormat};
use path_slash::PathExt as _;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::path::Path;
use walkdir::WalkDir;

type EmbeddedFiles = Vec<(String, Cow<'static, [u8]>)>;

/// A named source of embedded locale files.
#[derive(Debug)]
pub struct LocaleAssets {
    name: &'static str,
    files: fn() -> EmbeddedFiles,
}

inventory::collect!(LocaleAssets);

impl LocaleAssets {
    /// Wraps a [`RustEmbed`] type whose folder is a locale root.
    pub const fn embedded<T: RustEmbed>(name: &'static str) -> Self {
        Self {
            name,
            files: embedded_files::<T>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Parses every `.json` and `.php` file of this source.
    pub fn load(&self) -> Result<Vec<LocaleFile>, LangError> {
        (self.files)()
            .into_iter()
            .filter(|(path, _)| ResourceFormat::from_path(path).is_some())
            .map(|(path, data)| LocaleFile::parse(format!("./{}", path), &data))
            .collect()
    }
}

fn embedded_files<T: RustEmbed>() -> EmbeddedFiles {
    let mut files: EmbeddedFiles = T::iter()
        .filter_map(|path| T::get(&path).map(|file| (path.into_owned(), file.data)))
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

/// Registers a [`RustEmbed`] type as a locale source picked up at install.
///
/// ```ignore
/// #[derive(rust_embed::RustEmbed)]
/// #[folder = "resources/lang"]
/// struct Lang;
///
/// lang_bridge::register_locale_assets!(Lang);
/// ```
#[macro_export]
macro_rules! register_locale_assets {
    ($assets:ty) => {
        $crate::register_locale_assets!($assets, stringify!($assets));
    };
    ($assets:ty, $name:expr) => {
        $crate::__inventory::submit! {
            $crate::discovery::LocaleAssets::embedded::<$assets>($name)
        }
    };
}

/// Iterates the registered embedded sources.
pub fn registered_assets() -> impl Iterator<Item = &'static LocaleAssets> {
    inventory::iter::<LocaleAssets>()
}

/// Loads the files of every registered embedded source.
pub fn discover_registered() -> Result<Vec<LocaleFile>, LangError> {
    let mut files = Vec::new();

    for assets in registered_assets() {
        let loaded = assets.load()?;
        tracing::info!(
            "Discovered locale assets '{}' with {} files",
            assets.name(),
            loaded.len()
        );
        files.extend(loaded);
    }

    Ok(files)
}

/// Reads every `.json` and `.php` file below `root`, sorted by path.
pub fn read_dir(root: &Path) -> Result<Vec<LocaleFile>, InstallError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let Some(relative) = relative.to_slash() else {
            tracing::warn!("Skipping non UTF-8 locale path '{}'", entry.path().display());
            continue;
        };
        if ResourceFormat::from_path(&relative).is_none() {
            continue;
        }

        let data = fs::read(entry.path()).map_err(LangError::Io)?;
        files.push(LocaleFile::parse(format!("./{}", relative), &data)?);
    }

    tracing::debug!(
        "Read {} locale files from '{}'",
        files.len(),
        root.display()
    );
    Ok(files)
}
