//! Build-script support for crates that embed their locale files.

use crate::{CONFIG_FILE_NAME, LangConfig, LangConfigError};
use lang_bridge_core::LocalePath;
use path_slash::PathExt as _;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Paths a build script should watch for the crate at `manifest_dir`.
///
/// That is `lang.toml`, the assets directory, every locale directory (so added
/// and removed files are noticed) and every file the catalogue would load.
/// The configuration is validated first.
pub fn rerun_paths(manifest_dir: &Path) -> Result<Vec<PathBuf>, LangConfigError> {
    let config = LangConfig::from_manifest_dir(manifest_dir)?;
    config.validate(Some(manifest_dir))?;

    let assets_dir = config.assets_dir_from_base(Some(manifest_dir))?;
    let mut paths = vec![manifest_dir.join(CONFIG_FILE_NAME), assets_dir.clone()];

    for entry in WalkDir::new(&assets_dir)
        .min_depth(1)
        .max_depth(2)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_dir() {
            if entry.depth() == 1 {
                paths.push(entry.into_path());
            }
            continue;
        }

        let Some(relative) = entry
            .path()
            .strip_prefix(&assets_dir)
            .ok()
            .and_then(|relative| relative.to_slash())
        else {
            continue;
        };

        match LocalePath::classify(&relative) {
            LocalePath::Global { .. } | LocalePath::Scoped { .. } => paths.push(entry.into_path()),
            LocalePath::Unrecognized(_) => {},
        }
    }

    Ok(paths)
}

/// Emits `cargo:rerun-if-changed` for every path in [`rerun_paths`].
///
/// Call this from your crate's `build.rs`:
///
/// ```no_run
/// fn main() -> Result<(), lang_bridge_toml::LangConfigError> {
///     lang_bridge_toml::build::track_lang_assets()
/// }
/// ```
pub fn track_lang_assets() -> Result<(), LangConfigError> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| LangConfigError::NotFound)?;

    for path in rerun_paths(Path::new(&manifest_dir))? {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    Ok(())
}
