//! Property tests for import scanning.

use proptest::prelude::*;

use blockcheck::scan_references;

fn identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,12}").unwrap()
}

fn filename() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_-]{1,12}\\.(png|jpg|webp)").unwrap()
}

fn import_line(ident: &str, file: &str) -> String {
    format!("import {} from '../assets/blocks/{}';", ident, file)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every well-formed import is extracted, in order, duplicates kept.
    #[test]
    fn property_scan_preserves_order(
        imports in proptest::collection::vec((identifier(), filename()), 0..=10),
    ) {
        let text = imports
            .iter()
            .map(|(ident, file)| import_line(ident, file))
            .collect::<Vec<_>>()
            .join("\n");

        let expected: Vec<String> = imports.iter().map(|(_, file)| file.clone()).collect();
        prop_assert_eq!(scan_references(&text), expected);
    }

    /// PROPERTY: Text without the import keyword never yields references.
    #[test]
    fn property_no_import_keyword_no_references(
        text in "(?s).{0,256}".prop_filter("no import keyword", |s| !s.contains("import")),
    ) {
        prop_assert!(scan_references(&text).is_empty());
    }

    /// PROPERTY: Scanning never panics on arbitrary input.
    #[test]
    fn property_scan_never_panics(text in "(?s).{0,512}") {
        let _ = scan_references(&text);
    }
}
