//! Assembly of locale files into a `"<locale>.<domain>"` lookup table.

use crate::error::LangError;
use crate::ignore::IgnoreList;
use crate::locale_path::LocalePath;
use crate::messages::Messages;
use crate::resource::LocaleFile;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Domain name used for root-level locale files unless configured otherwise.
pub const DEFAULT_GLOBAL_DOMAIN: &str = "__global__";

/// Translation tables keyed by `"<locale>.<domain>"`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalogue(IndexMap<String, Messages>);

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry_key(locale: &str, domain: &str) -> String {
        format!("{}.{}", locale, domain)
    }

    /// Adds or replaces the table for `locale`/`domain`.
    pub fn insert(&mut self, locale: &str, domain: &str, messages: Messages) {
        self.insert_entry(Self::entry_key(locale, domain), messages);
    }

    fn insert_entry(&mut self, key: String, messages: Messages) {
        if self.0.insert(key.clone(), messages).is_some() {
            tracing::debug!("Catalogue entry '{}' was defined twice, keeping the last", key);
        }
    }

    pub fn get(&self, locale: &str, domain: &str) -> Option<&Messages> {
        self.0.get(&Self::entry_key(locale, domain))
    }

    pub fn get_entry(&self, key: &str) -> Option<&Messages> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Messages)> {
        self.0.iter().map(|(key, messages)| (key.as_str(), messages))
    }

    /// Distinct locales, in first-seen order.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = Vec::new();
        for locale in self.keys().filter_map(|key| key.split_once('.').map(|(l, _)| l)) {
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
        locales
    }

    /// Domains present for `locale`, including the global domain.
    pub fn domains(&self, locale: &str) -> Vec<&str> {
        self.keys()
            .filter_map(|key| key.split_once('.'))
            .filter(|(l, _)| *l == locale)
            .map(|(_, domain)| domain)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Messages)> for Catalogue {
    fn from_iter<T: IntoIterator<Item = (String, Messages)>>(iter: T) -> Self {
        let mut catalogue = Self::new();
        for (key, messages) in iter {
            catalogue.insert_entry(key, messages);
        }
        catalogue
    }
}

/// What to do with files that match neither locale layout.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrecognizedPolicy {
    /// Drop the file silently.
    Skip,
    /// Drop the file and log a warning.
    #[default]
    Warn,
    /// Fail the build with [`LangError::UnrecognizedPath`].
    Error,
}

/// Where a single file lands in the catalogue.
#[derive(Debug, Eq, PartialEq)]
enum Placement {
    Entry(String),
    Ignored,
    Unrecognized,
}

fn place(path: &str, ignore: &IgnoreList, global_domain: &str) -> Placement {
    match LocalePath::classify(path) {
        LocalePath::Global { locale, .. } => {
            Placement::Entry(Catalogue::entry_key(&locale, global_domain))
        },
        LocalePath::Scoped { locale, domain, .. } => {
            if ignore.is_ignored(&locale, &domain) {
                Placement::Ignored
            } else {
                Placement::Entry(Catalogue::entry_key(&locale, &domain))
            }
        },
        LocalePath::Unrecognized(_) => Placement::Unrecognized,
    }
}

/// Builds a catalogue from discovered files.
///
/// Root-level files land under `"<locale>.<global_domain>"`, scoped files under
/// `"<locale>.<domain>"` unless ignored. Unrecognized paths are logged and dropped.
pub fn build<I>(files: I, ignore: &IgnoreList, global_domain: &str) -> Catalogue
where
    I: IntoIterator<Item = LocaleFile>,
{
    CatalogueBuilder::new(global_domain)
        .ignore(ignore.clone())
        .assemble(files)
        .0
}

/// Configurable catalogue assembly.
#[derive(Clone, Debug)]
pub struct CatalogueBuilder {
    global_domain: String,
    ignore: IgnoreList,
    unrecognized: UnrecognizedPolicy,
}

impl Default for CatalogueBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_GLOBAL_DOMAIN)
    }
}

impl CatalogueBuilder {
    pub fn new(global_domain: impl Into<String>) -> Self {
        Self {
            global_domain: global_domain.into(),
            ignore: IgnoreList::default(),
            unrecognized: UnrecognizedPolicy::default(),
        }
    }

    pub fn ignore(mut self, ignore: IgnoreList) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn unrecognized(mut self, policy: UnrecognizedPolicy) -> Self {
        self.unrecognized = policy;
        self
    }

    pub fn global_domain(&self) -> &str {
        &self.global_domain
    }

    /// Builds the catalogue, failing on the first unrecognized path under
    /// [`UnrecognizedPolicy::Error`].
    pub fn build<I>(&self, files: I) -> Result<Catalogue, LangError>
    where
        I: IntoIterator<Item = LocaleFile>,
    {
        match self.assemble(files) {
            (_, Some(path)) => Err(LangError::UnrecognizedPath(path)),
            (catalogue, None) => Ok(catalogue),
        }
    }

    /// Places every file. Stops at the first unrecognized path under
    /// [`UnrecognizedPolicy::Error`] and hands it back.
    fn assemble<I>(&self, files: I) -> (Catalogue, Option<String>)
    where
        I: IntoIterator<Item = LocaleFile>,
    {
        let mut catalogue = Catalogue::new();

        for file in files {
            match place(&file.path, &self.ignore, &self.global_domain) {
                Placement::Entry(key) => {
                    tracing::debug!("Locale file '{}' -> '{}'", file.path, key);
                    catalogue.insert_entry(key, file.content);
                },
                Placement::Ignored => tracing::debug!("Ignoring locale file '{}'", file.path),
                Placement::Unrecognized => match self.unrecognized {
                    UnrecognizedPolicy::Skip => {},
                    UnrecognizedPolicy::Warn => {
                        tracing::warn!("Skipping unrecognized locale file '{}'", file.path)
                    },
                    UnrecognizedPolicy::Error => return (catalogue, Some(file.path)),
                },
            }
        }

        (catalogue, None)
    }
}
