//! Property tests for the inventory check.

use proptest::prelude::*;

use grove::domain::entities::{ExistingAssets, ExpectedCatalog};
use grove::domain::services::check_inventory;
use grove::domain::value_objects::{ModelFormat, ModelSlot, Species};

/// All 39 expected file names
fn expected_files() -> Vec<String> {
    ExpectedCatalog::new()
        .all_names()
        .iter()
        .map(|n| n.file_name(ModelFormat::Glb))
        .collect()
}

fn subset() -> impl Strategy<Value = Vec<String>> {
    let all = expected_files();
    proptest::collection::vec(any::<bool>(), all.len()).prop_map(move |mask| {
        all.iter()
            .zip(mask)
            .filter(|(_, keep)| *keep)
            .map(|(name, _)| name.clone())
            .collect()
    })
}

fn shout(name: &str) -> String {
    name.to_uppercase()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every expected file is either present or listed as missing.
    #[test]
    fn property_present_plus_missing_is_everything(files in subset()) {
        let existing = ExistingAssets::from_file_names(&files, ModelFormat::Glb);
        let report = check_inventory(&ExpectedCatalog::new(), &existing);

        prop_assert_eq!(report.missing_files.len() + files.len(), expected_files().len());
        for file in &files {
            prop_assert!(!report.missing_files.contains(file));
        }
    }

    /// PROPERTY: a species is complete exactly when all five of its slots exist.
    #[test]
    fn property_complete_means_all_slots(files in subset()) {
        let existing = ExistingAssets::from_file_names(&files, ModelFormat::Glb);
        let report = check_inventory(&ExpectedCatalog::new(), &existing);

        for species in Species::ALL {
            let all = ModelSlot::ALL.iter().all(|slot| report.is_present(species, *slot));
            prop_assert_eq!(report.is_complete(species), all);
        }
    }

    /// PROPERTY: file name case never changes the outcome.
    #[test]
    fn property_case_insensitive(files in subset()) {
        let lower = ExistingAssets::from_file_names(&files, ModelFormat::Glb);
        let upper = ExistingAssets::from_file_names(
            files.iter().map(|f| shout(f)),
            ModelFormat::Glb,
        );
        let catalog = ExpectedCatalog::new();

        let a = check_inventory(&catalog, &lower);
        let b = check_inventory(&catalog, &upper);
        prop_assert_eq!(a.missing_files, b.missing_files);
        prop_assert_eq!(a.complete_tree_types, b.complete_tree_types);
    }

    /// PROPERTY: arbitrary directory entries never panic the scan.
    #[test]
    fn property_arbitrary_names_never_panic(
        names in proptest::collection::vec("(?s).{0,40}", 0..20)
    ) {
        let existing = ExistingAssets::from_file_names(&names, ModelFormat::Glb);
        let _ = check_inventory(&ExpectedCatalog::new(), &existing);
    }
}
