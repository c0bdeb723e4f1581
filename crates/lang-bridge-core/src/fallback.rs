use unic_langid::LanguageIdentifier;

/// Returns the locales to try, in order, when resolving a message.
///
/// This yields the requested locale first, then its primary language subtag
/// when region/script/variant subtags are present, then the fallback locale.
/// Locale codes keep the spelling used by the catalogue (`pt_BR` stays `pt_BR`).
pub fn locale_chain(requested: &str, fallback: &str) -> Vec<String> {
    let mut chain = vec![requested.to_string()];

    if let Some(primary) = primary_language(requested) {
        chain.push(primary);
    }

    chain.push(fallback.to_string());
    if let Some(primary) = primary_language(fallback) {
        chain.push(primary);
    }

    let mut seen = Vec::with_capacity(chain.len());
    chain.retain(|locale| {
        if locale.is_empty() || seen.contains(locale) {
            false
        } else {
            seen.push(locale.clone());
            true
        }
    });
    chain
}

/// The language subtag of `locale`, when it carries more than a language.
fn primary_language(locale: &str) -> Option<String> {
    let parsed = locale.parse::<LanguageIdentifier>().ok()?;

    let needs_primary_fallback = parsed.script.is_some()
        || parsed.region.is_some()
        || parsed.variants().next().is_some();

    needs_primary_fallback.then(|| parsed.language.as_str().to_string())
}
