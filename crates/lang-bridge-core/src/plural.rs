//! Plural form selection for `|`-separated messages.
//!
//! ```text
//! apple|apples
//! {0} No apples|{1} One apple|[2,*] :count apples
//! ```

/// Selects the segment of `message` to use for `count` in `locale`.
///
/// A segment whose `{n}` or `[min,max]` prefix matches `count` wins. Otherwise
/// the locale's plural rule indexes every segment, prefixes stripped, clamped
/// to the last one.
pub fn select(message: &str, count: i64, locale: &str) -> String {
    let segments: Vec<&str> = message.split('|').collect();

    for segment in &segments {
        if let Some((condition, text)) = split_condition(segment)
            && condition.matches(count)
        {
            return text.trim().to_string();
        }
    }

    let stripped: Vec<&str> = segments
        .iter()
        .map(|segment| split_condition(segment).map_or(*segment, |(_, text)| text).trim())
        .collect();

    let index = plural_index(locale, count).min(stripped.len().saturating_sub(1));
    stripped.get(index).copied().unwrap_or_default().to_string()
}

#[derive(Debug, PartialEq)]
enum Condition {
    Exact(Vec<i64>),
    Range(Option<i64>, Option<i64>),
}

impl Condition {
    fn matches(&self, count: i64) -> bool {
        match self {
            Condition::Exact(values) => values.contains(&count),
            Condition::Range(min, max) => {
                min.is_none_or(|min| count >= min) && max.is_none_or(|max| count <= max)
            },
        }
    }
}

fn split_condition(segment: &str) -> Option<(Condition, &str)> {
    let trimmed = segment.trim_start();

    if let Some(rest) = trimmed.strip_prefix('{') {
        let (inner, text) = rest.split_once('}')?;
        let values = inner
            .split(',')
            .map(|value| value.trim().parse::<i64>().ok())
            .collect::<Option<Vec<_>>>()?;
        return Some((Condition::Exact(values), text));
    }

    if let Some(rest) = trimmed.strip_prefix('[') {
        let (inner, text) = rest.split_once(']')?;
        let (min, max) = inner.split_once(',')?;
        return Some((Condition::Range(bound(min)?, bound(max)?), text));
    }

    None
}

/// `*` and `Inf` are open bounds.
fn bound(value: &str) -> Option<Option<i64>> {
    match value.trim() {
        "*" | "Inf" | "-Inf" | "+Inf" => Some(None),
        other => other.parse().ok().map(Some),
    }
}

/// Index of the plural form for `count` in `locale`.
pub fn plural_index(locale: &str, count: i64) -> usize {
    let n = count.unsigned_abs();
    let language = if locale == "pt_BR" || locale == "pt-BR" {
        "pt_BR"
    } else {
        locale.split(['_', '-']).next().unwrap_or(locale)
    };

    match language {
        "az" | "bo" | "dz" | "id" | "ja" | "jv" | "ka" | "km" | "kn" | "ko" | "ms" | "th"
        | "tr" | "vi" | "zh" => 0,
        "am" | "bh" | "fil" | "fr" | "gun" | "hi" | "hy" | "ln" | "mg" | "nso" | "pt_BR"
        | "ti" | "wa" | "xbr" => {
            if n == 0 || n == 1 {
                0
            } else {
                1
            }
        },
        "be" | "bs" | "hr" | "ru" | "sh" | "sr" | "uk" => {
            if n % 10 == 1 && n % 100 != 11 {
                0
            } else if (2..=4).contains(&(n % 10)) && !(10..20).contains(&(n % 100)) {
                1
            } else {
                2
            }
        },
        "cs" | "sk" => match n {
            1 => 0,
            2..=4 => 1,
            _ => 2,
        },
        "ga" => match n {
            1 => 0,
            2 => 1,
            _ => 2,
        },
        "lt" => {
            if n % 10 == 1 && n % 100 != 11 {
                0
            } else if n % 10 >= 2 && !(10..20).contains(&(n % 100)) {
                1
            } else {
                2
            }
        },
        "sl" => match n % 100 {
            1 => 0,
            2 => 1,
            3 | 4 => 2,
            _ => 3,
        },
        "mk" => {
            if n % 10 == 1 {
                0
            } else {
                1
            }
        },
        "lv" => {
            if n == 0 {
                0
            } else if n % 10 == 1 && n % 100 != 11 {
                1
            } else {
                2
            }
        },
        "pl" => {
            if n == 1 {
                0
            } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                1
            } else {
                2
            }
        },
        "ro" => {
            if n == 1 {
                0
            } else if n == 0 || (1..20).contains(&(n % 100)) {
                1
            } else {
                2
            }
        },
        "ar" => match n {
            0 => 0,
            1 => 1,
            2 => 2,
            _ if (3..=10).contains(&(n % 100)) => 3,
            _ if (11..=99).contains(&(n % 100)) => 4,
            _ => 5,
        },
        _ => {
            if n == 1 {
                0
            } else {
                1
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en", 0, 1)]
    #[case("en", 1, 0)]
    #[case("en", 2, 1)]
    #[case("fr", 0, 0)]
    #[case("fr", 1, 0)]
    #[case("fr", 2, 1)]
    #[case("pt_BR", 0, 0)]
    #[case("pt_PT", 0, 1)]
    #[case("ja", 5, 0)]
    #[case("ru", 1, 0)]
    #[case("ru", 3, 1)]
    #[case("ru", 11, 2)]
    #[case("ru", 21, 0)]
    #[case("ru-RU", 25, 2)]
    #[case("pl", 22, 1)]
    #[case("pl", 12, 2)]
    #[case("cs", 3, 1)]
    #[case("ar", 100, 5)]
    #[case("en", -1, 0)]
    fn plural_indices(#[case] locale: &str, #[case] count: i64, #[case] expected: usize) {
        assert_eq!(plural_index(locale, count), expected);
    }

    #[test]
    fn selects_by_plural_rule() {
        assert_eq!(select("apple|apples", 1, "en"), "apple");
        assert_eq!(select("apple|apples", 2, "en"), "apples");
        assert_eq!(select("apple|apples", 0, "en"), "apples");
        assert_eq!(select("pomme|pommes", 0, "fr"), "pomme");
    }

    #[test]
    fn explicit_conditions_win() {
        let message = "{0} None|{1} One|[2,5] A few|[6,*] Many";
        assert_eq!(select(message, 0, "en"), "None");
        assert_eq!(select(message, 1, "en"), "One");
        assert_eq!(select(message, 4, "en"), "A few");
        assert_eq!(select(message, 60, "en"), "Many");
    }

    #[test]
    fn plural_rule_indexes_every_segment() {
        let message = "{0} No apples|one apple|:count apples";
        assert_eq!(select(message, 0, "en"), "No apples");
        assert_eq!(select(message, 1, "en"), "No apples");
        assert_eq!(select(message, 7, "en"), "one apple");
        assert_eq!(select("{5} Five|item|items", 2, "en"), "item");
    }

    #[test]
    fn unmatched_conditions_use_their_text() {
        assert_eq!(select("{0} None|{1} One", 3, "en"), "One");
        assert_eq!(select("[*,0] Owed|{1,2} Few", 1, "en"), "Few");
    }

    #[test]
    fn single_form_is_always_used() {
        assert_eq!(select("sheep", 10, "en"), "sheep");
        assert_eq!(select("", 10, "en"), "");
    }
}
