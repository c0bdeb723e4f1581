//! The translation helper handed to application components.

use lang_bridge_core::locale_path::is_identifier;
use lang_bridge_core::{Replacements, Translator};
use std::fmt;
use std::sync::Arc;

/// A cheaply cloneable handle to the installed translator.
///
/// Keys of the form `domain.key` (two or more `[A-Za-z0-9_-]` segments) are
/// passed through as-is. Any other key is looked up in the global domain, and
/// a miss returns the caller's key rather than its global-qualified form.
#[derive(Clone)]
pub struct I18n {
    translator: Arc<dyn Translator>,
    global_key: Arc<str>,
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("global_key", &self.global_key)
            .field("locale", &self.translator.locale())
            .field("fallback_locale", &self.translator.fallback_locale())
            .finish()
    }
}

impl I18n {
    pub fn new(translator: impl Translator + 'static, global_key: impl AsRef<str>) -> Self {
        Self::from_arc(Arc::new(translator), global_key)
    }

    pub fn from_arc(translator: Arc<dyn Translator>, global_key: impl AsRef<str>) -> Self {
        Self {
            translator,
            global_key: Arc::from(global_key.as_ref()),
        }
    }

    /// The underlying translator.
    pub fn lang(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    pub fn translator(&self) -> Arc<dyn Translator> {
        Arc::clone(&self.translator)
    }

    pub fn global_translations_key(&self) -> &str {
        &self.global_key
    }

    /// Translates `key` in the current locale without replacements.
    pub fn __(&self, key: &str) -> String {
        self.translate(key, None, None)
    }

    /// Translates `key`, resolving bare keys against the global domain.
    pub fn translate(
        &self,
        key: &str,
        replacements: Option<&Replacements>,
        locale: Option<&str>,
    ) -> String {
        if is_qualified_key(key) {
            return self.translator.get(key, replacements, locale);
        }

        let qualified = self.qualify(key);
        let translated = self.translator.get(&qualified, replacements, locale);
        self.unqualify(translated)
    }

    /// Translates `key` with `replacements` in the current locale.
    pub fn trans(&self, key: &str, replacements: &Replacements) -> String {
        self.translate(key, Some(replacements), None)
    }

    /// Picks the plural form of `key` for `count`, with the same key resolution as [`translate`](Self::translate).
    pub fn choice(
        &self,
        key: &str,
        count: i64,
        replacements: Option<&Replacements>,
        locale: Option<&str>,
    ) -> String {
        if is_qualified_key(key) {
            return self.translator.choice(key, count, replacements, locale);
        }

        let qualified = self.qualify(key);
        let translated = self.translator.choice(&qualified, count, replacements, locale);
        self.unqualify(translated)
    }

    pub fn has(&self, key: &str, locale: Option<&str>) -> bool {
        if is_qualified_key(key) {
            self.translator.has(key, locale)
        } else {
            self.translator.has(&self.qualify(key), locale)
        }
    }

    pub fn locale(&self) -> String {
        self.translator.locale()
    }

    pub fn set_locale(&self, locale: &str) {
        self.translator.set_locale(locale);
    }

    fn qualify(&self, key: &str) -> String {
        format!("{}.{}", self.global_key, key)
    }

    /// Strips the `"<global>."` prefix a translator echoes back on a miss.
    fn unqualify(&self, translated: String) -> String {
        let prefix_len = self.global_key.len() + 1;
        let echoed = translated.starts_with(&*self.global_key)
            && translated[self.global_key.len()..].starts_with('.');

        if echoed {
            translated[prefix_len..].to_string()
        } else {
            translated
        }
    }
}

/// Returns `true` for keys naming a domain, like `auth.failed` or `auth.page.title`.
pub fn is_qualified_key(key: &str) -> bool {
    let mut segments = key.split('.');
    let first = segments.next().is_some_and(is_identifier);
    let mut rest = segments.peekable();

    first && rest.peek().is_some() && rest.all(is_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lang_bridge_core::{Catalogue, Lang, Messages};
    use rstest::rstest;

    fn i18n() -> I18n {
        let mut global = Messages::new();
        global.insert("greeting".to_string(), "Hello".into());
        global.insert("Welcome, :name".to_string(), "Welcome, :name!".into());
        global.insert("apples".to_string(), "apple|apples".into());

        let mut auth = Messages::new();
        auth.insert("failed".to_string(), "These credentials do not match our records.".into());

        let mut catalogue = Catalogue::new();
        catalogue.insert("en", "__global__", global);
        catalogue.insert("en", "auth", auth);

        I18n::new(Lang::with_fallback(catalogue, "en"), "__global__")
    }

    #[rstest]
    #[case("auth.failed", true)]
    #[case("auth.page.title", true)]
    #[case("some-domain.some_key", true)]
    #[case("greeting", false)]
    #[case("Welcome, :name", false)]
    #[case("Hello.", false)]
    #[case(".hidden", false)]
    #[case("a..b", false)]
    #[case("", false)]
    fn qualified_keys(#[case] key: &str, #[case] expected: bool) {
        assert_eq!(is_qualified_key(key), expected);
    }

    #[test]
    fn bare_keys_resolve_in_global_domain() {
        let i18n = i18n();
        assert_eq!(i18n.__("greeting"), "Hello");
        assert_eq!(
            i18n.trans("Welcome, :name", &Replacements::from([("name", "Ada")])),
            "Welcome, Ada!"
        );
    }

    #[test]
    fn bare_key_misses_echo_the_bare_key() {
        let i18n = i18n();
        assert_eq!(i18n.__("missing"), "missing");
        assert_eq!(i18n.__("Not translated yet."), "Not translated yet.");
    }

    #[test]
    fn qualified_keys_pass_through() {
        let i18n = i18n();
        assert_eq!(
            i18n.__("auth.failed"),
            "These credentials do not match our records."
        );
        assert_eq!(i18n.__("auth.missing"), "auth.missing");
        assert_eq!(i18n.__("__global__.missing"), "__global__.missing");
    }

    #[test]
    fn choice_uses_the_same_resolution() {
        let i18n = i18n();
        assert_eq!(i18n.choice("apples", 1, None, None), "apple");
        assert_eq!(i18n.choice("apples", 3, None, None), "apples");
        assert_eq!(i18n.choice("pears", 3, None, None), "pears");
    }

    #[test]
    fn has_checks_the_resolved_key() {
        let i18n = i18n();
        assert!(i18n.has("greeting", None));
        assert!(i18n.has("auth.failed", None));
        assert!(!i18n.has("missing", None));
    }

    #[test]
    fn lang_exposes_the_translator() {
        let i18n = i18n();
        assert_eq!(i18n.lang().fallback_locale(), "en");
        assert_eq!(i18n.lang().messages().len(), 2);

        let clone = i18n.clone();
        clone.set_locale("fr");
        assert_eq!(i18n.locale(), "fr");
    }
}
