//! Property tests for verification reports.

use proptest::prelude::*;

use blockcheck::{verify_imports, verify_text};

fn filename() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}\\.png").unwrap()
}

fn source_for(files: &[String]) -> String {
    files
        .iter()
        .enumerate()
        .map(|(i, f)| format!("import block{} from '../assets/blocks/{}';\n", i, f))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Verified and missing partition the references, each keeping
    /// extraction order, and success means nothing is missing.
    #[test]
    fn property_report_partitions_references(
        referenced in proptest::collection::vec(filename(), 0..=8),
        present in proptest::collection::btree_set(filename(), 0..=8),
    ) {
        let dir = tempfile::tempdir().unwrap();
        for name in &present {
            std::fs::write(dir.path().join(name), b"texture").unwrap();
        }

        let report = verify_text(&source_for(&referenced), dir.path());

        let expected_verified: Vec<&str> = referenced
            .iter()
            .filter(|f| present.contains(*f))
            .map(String::as_str)
            .collect();
        let expected_missing: Vec<&str> = referenced
            .iter()
            .filter(|f| !present.contains(*f))
            .map(String::as_str)
            .collect();

        prop_assert_eq!(report.verified().collect::<Vec<_>>(), expected_verified);
        prop_assert_eq!(report.missing().collect::<Vec<_>>(), expected_missing.clone());
        prop_assert_eq!(report.is_success(), expected_missing.is_empty());
    }

    /// PROPERTY: Two runs over unchanged files produce identical reports.
    #[test]
    fn property_verification_is_idempotent(
        referenced in proptest::collection::vec(filename(), 0..=8),
        present in proptest::collection::btree_set(filename(), 0..=4),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("blocks");
        std::fs::create_dir(&assets).unwrap();
        for name in &present {
            std::fs::write(assets.join(name), b"texture").unwrap();
        }
        let source = dir.path().join("MiningBlock.tsx");
        std::fs::write(&source, source_for(&referenced)).unwrap();

        let first = verify_imports(&source, &assets).unwrap();
        let second = verify_imports(&source, &assets).unwrap();

        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Sources with no matching imports always succeed.
    #[test]
    fn property_no_references_always_succeeds(
        lines in proptest::collection::vec("[a-z ;=]{0,30}", 0..=6),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let report = verify_text(&lines.join("\n"), dir.path());

        prop_assert!(report.is_empty());
        prop_assert!(report.is_success());
    }
}

