use crate::discovery;
use crate::error::InstallError;
use crate::facade::I18n;
use crate::options::LangOptions;
use lang_bridge_core::locale_path::is_identifier;
use lang_bridge_core::{Catalogue, CatalogueBuilder, Lang, LocaleFile, Translator};
use std::path::PathBuf;

/// Anything that hands the translation helper on to its components.
///
/// Implement this on an application or component context to receive the
/// [`I18n`] handle from [`LangPlugin::install_into`].
pub trait I18nHost {
    fn provide_i18n(&mut self, i18n: I18n);
}

/// Discovers locale files, builds the catalogue and installs a translator.
///
/// ```no_run
/// use lang_bridge::{LangOptions, LangPlugin};
///
/// let i18n = LangPlugin::new(LangOptions::default())
///     .with_dir("resources/lang")
///     .install()
///     .expect("locale files should load");
///
/// println!("{}", i18n.__("greeting"));
/// ```
#[derive(Debug)]
pub struct LangPlugin {
    options: LangOptions,
    dirs: Vec<PathBuf>,
    files: Vec<LocaleFile>,
    registered_assets: bool,
}

impl LangPlugin {
    pub fn new(options: LangOptions) -> Self {
        Self {
            options,
            dirs: Vec::new(),
            files: Vec::new(),
            registered_assets: true,
        }
    }

    /// Plugin configured from `lang.toml`, reading locale files from its `assets_dir`.
    ///
    /// `base_dir` defaults to `CARGO_MANIFEST_DIR`. The configuration is
    /// validated first, so a bad locale or a missing assets directory fails here.
    #[cfg(feature = "toml")]
    pub fn from_config(
        config: &lang_bridge_toml::LangConfig,
        base_dir: Option<&std::path::Path>,
    ) -> Result<Self, InstallError> {
        config.validate(base_dir)?;
        let assets_dir = config.assets_dir_from_base(base_dir)?;
        Ok(Self::new(LangOptions::from_config(config)).with_dir(assets_dir))
    }

    /// Also reads locale files from `dir` at install.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.push(dir.into());
        self
    }

    /// Adds already enumerated locale files.
    pub fn with_files(mut self, files: impl IntoIterator<Item = LocaleFile>) -> Self {
        self.files.extend(files);
        self
    }

    /// Skips sources registered with [`register_locale_assets!`](crate::register_locale_assets).
    pub fn without_registered_assets(mut self) -> Self {
        self.registered_assets = false;
        self
    }

    pub fn options(&self) -> &LangOptions {
        &self.options
    }

    /// Builds the catalogue without installing a translator.
    ///
    /// Pre-supplied `messages` are returned unchanged.
    pub fn catalogue(&self) -> Result<Catalogue, InstallError> {
        let global_key = &self.options.global_translations_key;
        if !is_identifier(global_key) {
            return Err(InstallError::InvalidGlobalTranslationsKey(global_key.clone()));
        }

        if let Some(messages) = &self.options.messages {
            tracing::debug!("Using pre-built catalogue, skipping discovery");
            return Ok(messages.clone());
        }

        let mut files = Vec::new();
        if self.registered_assets {
            files.extend(discovery::discover_registered()?);
        }
        for dir in &self.dirs {
            files.extend(discovery::read_dir(dir)?);
        }
        files.extend(self.files.iter().cloned());

        let catalogue = CatalogueBuilder::new(global_key)
            .ignore(self.options.ignore.clone())
            .unrecognized(self.options.unrecognized)
            .build(files)?;

        Ok(catalogue)
    }

    /// Installs the default [`Lang`] translator.
    pub fn install(self) -> Result<I18n, InstallError> {
        self.install_with(|catalogue, options| {
            Lang::new(
                catalogue,
                options.initial_locale(),
                options.fallback_locale.clone(),
            )
        })
    }

    /// Installs a custom translator built from the catalogue and options.
    pub fn install_with<T, F>(self, factory: F) -> Result<I18n, InstallError>
    where
        T: Translator + 'static,
        F: FnOnce(Catalogue, &LangOptions) -> T,
    {
        let catalogue = self.catalogue()?;
        tracing::info!(
            "Installing translator with {} catalogue entries across {} locales",
            catalogue.len(),
            catalogue.locales().len()
        );

        let translator = factory(catalogue, &self.options);
        Ok(I18n::new(translator, &self.options.global_translations_key))
    }

    /// Installs the default translator and hands it to `host`.
    pub fn install_into<H>(self, host: &mut H) -> Result<I18n, InstallError>
    where
        H: I18nHost + ?Sized,
    {
        let i18n = self.install()?;
        host.provide_i18n(i18n.clone());
        Ok(i18n)
    }
}
