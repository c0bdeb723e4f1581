//! Classification of locale file paths.
//!
//! A discovery root holds two layouts:
//!
//! ```text
//! en.json            -> Global  { locale: "en" }
//! en/auth.php        -> Scoped  { locale: "en", domain: "auth" }
//! en/admin/users.php -> Unrecognized
//! ```

use crate::resource::ResourceFormat;

/// Where a locale file sits in the discovery root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LocalePath {
    /// A root-level `<locale>.<ext>` file holding the global domain.
    Global {
        locale: String,
        format: ResourceFormat,
    },
    /// A `<locale>/<domain>.<ext>` file.
    Scoped {
        locale: String,
        domain: String,
        format: ResourceFormat,
    },
    /// Anything else. Carries the original path.
    Unrecognized(String),
}

impl LocalePath {
    /// Classifies a path relative to the discovery root.
    ///
    /// A leading `./` is accepted and ignored, as are backslash separators.
    pub fn classify(path: &str) -> Self {
        let normalized = path.replace('\\', "/");
        let relative = normalized.strip_prefix("./").unwrap_or(&normalized);
        let segments: Vec<&str> = relative.split('/').collect();

        let classified = match segments.as_slice() {
            [file] => split_file_name(file).map(|(locale, format)| LocalePath::Global {
                locale: locale.to_string(),
                format,
            }),
            [locale, file] if is_identifier(locale) => {
                split_file_name(file).map(|(domain, format)| LocalePath::Scoped {
                    locale: locale.to_string(),
                    domain: domain.to_string(),
                    format,
                })
            },
            _ => None,
        };

        classified.unwrap_or_else(|| LocalePath::Unrecognized(path.to_string()))
    }

    pub fn locale(&self) -> Option<&str> {
        match self {
            LocalePath::Global { locale, .. } | LocalePath::Scoped { locale, .. } => Some(locale),
            LocalePath::Unrecognized(_) => None,
        }
    }

    pub fn format(&self) -> Option<ResourceFormat> {
        match self {
            LocalePath::Global { format, .. } | LocalePath::Scoped { format, .. } => Some(*format),
            LocalePath::Unrecognized(_) => None,
        }
    }
}

/// Splits `stem.ext` where the stem is an identifier and the extension is supported.
fn split_file_name(file: &str) -> Option<(&str, ResourceFormat)> {
    let (stem, extension) = file.rsplit_once('.')?;
    let format = ResourceFormat::from_extension(extension)?;
    is_identifier(stem).then_some((stem, format))
}

/// One or more ASCII alphanumerics, `_` or `-`.
pub fn is_identifier(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("./en.json", "en", ResourceFormat::Json)]
    #[case("en.php", "en", ResourceFormat::Php)]
    #[case("./pt_BR.json", "pt_BR", ResourceFormat::Json)]
    #[case("./zh-Hans.php", "zh-Hans", ResourceFormat::Php)]
    fn classifies_root_level_files(
        #[case] path: &str,
        #[case] locale: &str,
        #[case] format: ResourceFormat,
    ) {
        assert_eq!(
            LocalePath::classify(path),
            LocalePath::Global {
                locale: locale.to_string(),
                format
            }
        );
    }

    #[rstest]
    #[case("./en/auth.php", "en", "auth")]
    #[case("fr/validation.json", "fr", "validation")]
    #[case("./de\\pagination.php", "de", "pagination")]
    fn classifies_scoped_files(#[case] path: &str, #[case] locale: &str, #[case] domain: &str) {
        let classified = LocalePath::classify(path);
        assert!(matches!(
            classified,
            LocalePath::Scoped { locale: ref l, domain: ref d, .. } if l == locale && d == domain
        ));
    }

    #[rstest]
    #[case("./en.yaml")]
    #[case("./en/admin/users.php")]
    #[case("./en.backup.json")]
    #[case("./.json")]
    #[case("./e n/auth.json")]
    #[case("./en/")]
    #[case("")]
    fn leaves_other_paths_unrecognized(#[case] path: &str) {
        assert_eq!(
            LocalePath::classify(path),
            LocalePath::Unrecognized(path.to_string())
        );
    }

    #[test]
    fn accessors_expose_locale_and_format() {
        let scoped = LocalePath::classify("./en/auth.php");
        assert_eq!(scoped.locale(), Some("en"));
        assert_eq!(scoped.format(), Some(ResourceFormat::Php));

        let unknown = LocalePath::classify("README.md");
        assert_eq!(unknown.locale(), None);
        assert_eq!(unknown.format(), None);
    }
}
