use crate::catalogue::Catalogue;
use crate::fallback::locale_chain;
use crate::messages::{self, Message};
use crate::plural;
use crate::translator::{Replacements, Translator, apply_replacements};
use parking_lot::RwLock;
use std::sync::Arc;

pub const DEFAULT_LOCALE: &str = "en";

/// The default [`Translator`]: a `"<locale>.<domain>"` catalogue with
/// `:placeholder` replacements, locale fallback and `|` plural forms.
#[derive(Debug)]
pub struct Lang {
    messages: Arc<Catalogue>,
    locale: RwLock<String>,
    fallback: String,
}

impl Lang {
    pub fn new(
        messages: impl Into<Arc<Catalogue>>,
        locale: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            messages: messages.into(),
            locale: RwLock::new(locale.into()),
            fallback: fallback.into(),
        }
    }

    /// Translator using `fallback` as both the current and the fallback locale.
    pub fn with_fallback(messages: impl Into<Arc<Catalogue>>, fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        Self::new(messages, fallback.clone(), fallback)
    }

    /// Finds the message text for `key`, walking the locale chain.
    fn find(&self, key: &str, locale: Option<&str>) -> Option<(&str, String)> {
        let (domain, path) = key.split_once('.')?;
        let requested = match locale {
            Some(locale) => locale.to_string(),
            None => self.locale(),
        };

        locale_chain(&requested, &self.fallback)
            .into_iter()
            .find_map(|candidate| {
                let table = self.messages.get(&candidate, domain)?;
                let text = messages::lookup(table, path).and_then(Message::as_text)?;
                Some((text, candidate))
            })
    }
}

impl Translator for Lang {
    fn get(&self, key: &str, replacements: Option<&Replacements>, locale: Option<&str>) -> String {
        match self.find(key, locale) {
            Some((text, _)) => match replacements {
                Some(replacements) => apply_replacements(text, replacements),
                None => text.to_string(),
            },
            None => key.to_string(),
        }
    }

    fn has(&self, key: &str, locale: Option<&str>) -> bool {
        self.find(key, locale).is_some()
    }

    fn choice(
        &self,
        key: &str,
        count: i64,
        replacements: Option<&Replacements>,
        locale: Option<&str>,
    ) -> String {
        let Some((text, resolved_locale)) = self.find(key, locale) else {
            return key.to_string();
        };

        let mut replacements = replacements.cloned().unwrap_or_default();
        if !replacements.contains("count") {
            replacements.insert("count", count);
        }

        let form = plural::select(text, count, &resolved_locale);
        apply_replacements(&form, &replacements)
    }

    fn locale(&self) -> String {
        self.locale.read().clone()
    }

    fn set_locale(&self, locale: &str) {
        *self.locale.write() = locale.to_string();
    }

    fn fallback_locale(&self) -> String {
        self.fallback.clone()
    }

    fn messages(&self) -> &Catalogue {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Messages;

    fn table(entries: &[(&str, &str)]) -> Messages {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), Message::from(*value)))
            .collect()
    }

    fn lang() -> Lang {
        let mut nested = Messages::new();
        nested.insert("title".to_string(), "Settings".into());

        let mut en_auth = table(&[
            ("failed", "These credentials do not match our records."),
            ("welcome", "Welcome, :name!"),
            ("apples", "{0} No apples|{1} One apple|[2,*] :count apples"),
        ]);
        en_auth.insert("page".to_string(), nested.into());

        let mut catalogue = Catalogue::new();
        catalogue.insert("en", "__global__", table(&[("greeting", "Hello")]));
        catalogue.insert("en", "auth", en_auth);
        catalogue.insert("fr", "auth", table(&[("failed", "Identifiants incorrects.")]));
        catalogue.insert("pt", "auth", table(&[("failed", "Credenciais inválidas.")]));

        Lang::with_fallback(catalogue, "en")
    }

    #[test]
    fn resolves_in_current_locale() {
        let lang = lang();
        assert_eq!(
            lang.get("auth.failed", None, None),
            "These credentials do not match our records."
        );
        assert_eq!(lang.get("__global__.greeting", None, None), "Hello");
        assert_eq!(lang.get("auth.page.title", None, None), "Settings");
    }

    #[test]
    fn explicit_locale_and_fallback() {
        let lang = lang();
        assert_eq!(lang.get("auth.failed", None, Some("fr")), "Identifiants incorrects.");
        assert_eq!(lang.get("auth.welcome", None, Some("fr")), "Welcome, :name!");
        assert_eq!(lang.get("auth.failed", None, Some("pt_BR")), "Credenciais inválidas.");
    }

    #[test]
    fn misses_echo_the_key() {
        let lang = lang();
        assert_eq!(lang.get("auth.missing", None, None), "auth.missing");
        assert_eq!(lang.get("nodomain", None, None), "nodomain");
        assert_eq!(lang.get("auth.page", None, None), "auth.page");
        assert!(!lang.has("auth.page", None));
        assert!(lang.has("auth.page.title", None));
    }

    #[test]
    fn applies_replacements() {
        let lang = lang();
        let replacements = Replacements::from([("name", "ada")]);
        assert_eq!(
            lang.get("auth.welcome", Some(&replacements), None),
            "Welcome, ada!"
        );
    }

    #[test]
    fn choice_injects_count() {
        let lang = lang();
        assert_eq!(lang.choice("auth.apples", 0, None, None), "No apples");
        assert_eq!(lang.choice("auth.apples", 1, None, None), "One apple");
        assert_eq!(lang.choice("auth.apples", 4, None, None), "4 apples");
        assert_eq!(lang.choice("auth.pears", 4, None, None), "auth.pears");
    }

    #[test]
    fn set_locale_changes_default_lookup() {
        let lang = lang();
        lang.set_locale("fr");
        assert_eq!(lang.locale(), "fr");
        assert_eq!(lang.fallback_locale(), "en");
        assert_eq!(lang.get("auth.failed", None, None), "Identifiants incorrects.");
    }
}
