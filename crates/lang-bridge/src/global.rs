//! A process-wide translation helper for code that cannot take an [`I18n`] handle.

use crate::error::InstallError;
use crate::facade::I18n;
use crate::options::LangOptions;
use crate::plugin::LangPlugin;
use lang_bridge_core::{Replacements, Translator};
use std::sync::OnceLock;

static GLOBAL_I18N: OnceLock<I18n> = OnceLock::new();

/// Installs the plugin with `options` and stores the helper globally.
///
/// Locale files come from every source registered with
/// [`register_locale_assets!`](crate::register_locale_assets), unless
/// `options.messages` is set.
///
/// This function should be called once at the beginning of your application's
/// lifecycle. Later calls log a warning and have no effect.
pub fn init(options: LangOptions) -> Result<(), InstallError> {
    if GLOBAL_I18N.get().is_some() {
        tracing::warn!("Global translator already initialized.");
        return Ok(());
    }

    set(LangPlugin::new(options).install()?);
    Ok(())
}

/// Stores an already installed helper globally.
pub fn set(i18n: I18n) {
    if GLOBAL_I18N.set(i18n).is_err() {
        tracing::warn!("Global translator already initialized.");
    }
}

/// The global helper, if [`init`] or [`set`] has run.
pub fn i18n() -> Option<&'static I18n> {
    GLOBAL_I18N.get()
}

/// The global translator, if [`init`] or [`set`] has run.
pub fn lang() -> Option<&'static dyn Translator> {
    GLOBAL_I18N.get().map(I18n::lang)
}

/// Translates `key` with the global helper.
///
/// Before initialization this logs an error and returns `key`.
pub fn __(key: &str) -> String {
    trans(key, None, None)
}

pub fn trans(key: &str, replacements: Option<&Replacements>, locale: Option<&str>) -> String {
    match GLOBAL_I18N.get() {
        Some(i18n) => i18n.translate(key, replacements, locale),
        None => {
            tracing::error!("Global translator not initialized. Call init() first.");
            key.to_string()
        },
    }
}

pub fn trans_choice(
    key: &str,
    count: i64,
    replacements: Option<&Replacements>,
    locale: Option<&str>,
) -> String {
    match GLOBAL_I18N.get() {
        Some(i18n) => i18n.choice(key, count, replacements, locale),
        None => {
            tracing::error!("Global translator not initialized. Call init() first.");
            key.to_string()
        },
    }
}

/// Selects the current locale of the global translator.
pub fn set_locale(locale: &str) {
    match GLOBAL_I18N.get() {
        Some(i18n) => i18n.set_locale(locale),
        None => tracing::error!("Global translator not initialized. Call init() first."),
    }
}
