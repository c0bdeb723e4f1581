use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Scoped `(locale, domain)` pairs to leave out of the catalogue.
///
/// Root-level (global) files are never matched against this list.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IgnoreList(IndexMap<String, IndexSet<String>>);

impl IgnoreList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `domains` to the ignored set of `locale`.
    pub fn with<I, S>(mut self, locale: impl Into<String>, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(locale, domains);
        self
    }

    pub fn insert<I, S>(&mut self, locale: impl Into<String>, domains: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(locale.into())
            .or_default()
            .extend(domains.into_iter().map(Into::into));
    }

    pub fn is_ignored(&self, locale: &str, domain: &str) -> bool {
        self.0
            .get(locale)
            .is_some_and(|domains| domains.contains(domain))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(IndexSet::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().flat_map(|(locale, domains)| {
            domains
                .iter()
                .map(move |domain| (locale.as_str(), domain.as_str()))
        })
    }
}

impl<L, I, S> FromIterator<(L, I)> for IgnoreList
where
    L: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (L, I)>>(iter: T) -> Self {
        let mut list = Self::new();
        for (locale, domains) in iter {
            list.insert(locale, domains);
        }
        list
    }
}
