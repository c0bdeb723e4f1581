use lang_bridge_core::{
    Catalogue, DEFAULT_GLOBAL_DOMAIN, DEFAULT_LOCALE, IgnoreList, UnrecognizedPolicy,
};

/// Install-time options.
///
/// ```
/// use lang_bridge::{IgnoreList, LangOptions};
///
/// let options = LangOptions::builder()
///     .fallback_locale("en")
///     .locale("fr")
///     .ignore(IgnoreList::new().with("fr", ["admin"]))
///     .build();
///
/// assert_eq!(options.global_translations_key, "__global__");
/// assert_eq!(options.initial_locale(), "fr");
/// ```
#[derive(Clone, Debug, bon::Builder)]
pub struct LangOptions {
    /// Locale consulted when a message is missing in the requested one.
    #[builder(into, default = DEFAULT_LOCALE.to_string())]
    pub fallback_locale: String,

    /// Locale selected at install. Defaults to the fallback locale.
    #[builder(into)]
    pub locale: Option<String>,

    /// Domain that root-level locale files are filed under, and that bare keys resolve against.
    ///
    /// Must match `[A-Za-z0-9_-]+`: the first `.` of a key ends its domain.
    /// Other values fail at install.
    #[builder(into, default = DEFAULT_GLOBAL_DOMAIN.to_string())]
    pub global_translations_key: String,

    /// Scoped `(locale, domain)` pairs to leave out of the catalogue.
    #[builder(default)]
    pub ignore: IgnoreList,

    /// A pre-built catalogue. When present, file discovery is skipped entirely.
    pub messages: Option<Catalogue>,

    /// Handling of discovered files that match neither locale layout.
    #[builder(default)]
    pub unrecognized: UnrecognizedPolicy,
}

impl Default for LangOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LangOptions {
    pub fn initial_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(&self.fallback_locale)
    }

    /// Options mirroring a `lang.toml` file.
    #[cfg(feature = "toml")]
    pub fn from_config(config: &lang_bridge_toml::LangConfig) -> Self {
        Self {
            fallback_locale: config.fallback_locale.clone(),
            locale: config.locale.clone(),
            global_translations_key: config.global_translations_key.clone(),
            ignore: config.ignore.clone(),
            messages: None,
            unrecognized: config.unrecognized,
        }
    }
}
