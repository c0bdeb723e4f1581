use lang_bridge_core::{
    Catalogue, CatalogueBuilder, IgnoreList, LocaleFile, UnrecognizedPolicy, build,
};
use rstest::rstest;

fn files() -> Vec<LocaleFile> {
    vec![
        LocaleFile::parse("./en.json", br#"{"greeting": "Hello"}"#).unwrap(),
        LocaleFile::parse("./fr.json", br#"{"greeting": "Bonjour"}"#).unwrap(),
        LocaleFile::parse(
            "./en/auth.php",
            b"<?php return ['failed' => 'These credentials do not match our records.'];",
        )
        .unwrap(),
        LocaleFile::parse("./en/admin.json", br#"{"title": "Admin"}"#).unwrap(),
        LocaleFile::parse("./fr/auth.php", b"<?php return ['failed' => 'Identifiants incorrects.'];")
            .unwrap(),
        LocaleFile::parse("./fr/admin.json", br#"{"title": "Administration"}"#).unwrap(),
        LocaleFile::parse("./fr/admin/users.json", br#"{"title": "Utilisateurs"}"#).unwrap(),
    ]
}

#[rstest]
#[case("__global__")]
#[case("app")]
fn root_files_land_in_global_domain(#[case] global: &str) {
    let catalogue = build(files(), &IgnoreList::new(), global);

    let en = catalogue.get("en", global).unwrap();
    assert_eq!(en["greeting"].as_text(), Some("Hello"));
    assert!(catalogue.contains_key(&format!("fr.{}", global)));
}

#[test]
fn scoped_files_land_in_their_domain() {
    let catalogue = build(files(), &IgnoreList::new(), "__global__");

    let keys: Vec<&str> = catalogue.keys().collect();
    assert_eq!(
        keys,
        vec![
            "en.__global__",
            "fr.__global__",
            "en.auth",
            "en.admin",
            "fr.auth",
            "fr.admin",
        ]
    );
    assert_eq!(
        catalogue.get("fr", "auth").unwrap()["failed"].as_text(),
        Some("Identifiants incorrects.")
    );
}

#[test]
fn ignored_pairs_are_absent() {
    let ignore = IgnoreList::new().with("fr", ["admin"]);
    let catalogue = build(files(), &ignore, "__global__");

    assert!(!catalogue.contains_key("fr.admin"));
    assert!(catalogue.contains_key("en.admin"));
    assert!(catalogue.contains_key("fr.auth"));
}

#[test]
fn ignoring_a_locale_name_keeps_its_root_file() {
    let ignore = IgnoreList::new().with("fr", ["__global__", "auth", "admin"]);
    let catalogue = build(files(), &ignore, "__global__");

    assert!(catalogue.contains_key("fr.__global__"));
    assert_eq!(catalogue.domains("fr"), vec!["__global__"]);
}

#[test]
fn disjoint_ignore_lists_differ_only_by_ignored_entries() {
    let first = build(files(), &IgnoreList::new().with("fr", ["admin"]), "__global__");
    let second = build(files(), &IgnoreList::new().with("en", ["auth"]), "__global__");
    let none = build(files(), &IgnoreList::new(), "__global__");

    let missing = |catalogue: &Catalogue| -> Vec<String> {
        none.keys()
            .filter(|key| !catalogue.contains_key(key))
            .map(str::to_string)
            .collect()
    };

    assert_eq!(missing(&first), vec!["fr.admin"]);
    assert_eq!(missing(&second), vec!["en.auth"]);
    assert!(first.keys().all(|key| none.contains_key(key)));
    assert!(second.keys().all(|key| none.contains_key(key)));

    assert_eq!(
        build(files(), &IgnoreList::new().with("fr", ["admin"]), "__global__"),
        first
    );
}

#[test]
fn strict_builder_rejects_nested_directories() {
    let result = CatalogueBuilder::new("__global__")
        .unrecognized(UnrecognizedPolicy::Error)
        .build(files());

    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("./fr/admin/users.json")
    );
}
