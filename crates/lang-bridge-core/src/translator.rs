use crate::catalogue::Catalogue;
use indexmap::IndexMap;

/// Values substituted for `:name` placeholders.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Replacements(IndexMap<String, String>);

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Replacements {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut replacements = Self::new();
        for (name, value) in iter {
            replacements.insert(name, value);
        }
        replacements
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Replacements {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// A translation engine backed by a [`Catalogue`].
///
/// Lookups never fail: a key that cannot be resolved is returned verbatim.
pub trait Translator: Send + Sync {
    /// Translates `key` (`"<domain>.<key>"`) in `locale`, or the current locale.
    fn get(&self, key: &str, replacements: Option<&Replacements>, locale: Option<&str>) -> String;

    /// Returns `true` when `key` resolves to a string in `locale` or one of its fallbacks.
    fn has(&self, key: &str, locale: Option<&str>) -> bool;

    /// Picks the plural form of `key` matching `count`.
    fn choice(
        &self,
        key: &str,
        count: i64,
        replacements: Option<&Replacements>,
        locale: Option<&str>,
    ) -> String;

    fn locale(&self) -> String;

    fn set_locale(&self, locale: &str);

    fn fallback_locale(&self) -> String;

    fn messages(&self) -> &Catalogue;
}

/// Substitutes `:name`, `:Name` and `:NAME` placeholders.
///
/// Longer names are replaced first so `:names` is not clobbered by `:name`.
pub fn apply_replacements(message: &str, replacements: &Replacements) -> String {
    let mut names: Vec<(&str, &str)> = replacements.iter().collect();
    names.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = message.to_string();
    for (name, value) in names {
        if name.is_empty() {
            continue;
        }
        out = out
            .replace(&format!(":{}", name.to_uppercase()), &value.to_uppercase())
            .replace(&format!(":{}", capitalize(name)), &capitalize(value))
            .replace(&format!(":{}", name), value);
    }
    out
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
