//! Property tests for gap planning.

use proptest::prelude::*;

use grove::domain::entities::{ExistingAssets, ExpectedCatalog};
use grove::domain::services::{missing_stage_models, plan_gaps, GapPlan};
use grove::domain::value_objects::{AssetName, GrowthStage, ModelFormat, Species};

/// Random subset of the species-specific library (generic and stages)
fn library_subset() -> impl Strategy<Value = Vec<String>> {
    let all: Vec<String> = Species::ALL
        .into_iter()
        .flat_map(|s| {
            std::iter::once(AssetName::generic(s))
                .chain(GrowthStage::ALL.into_iter().map(move |g| AssetName::stage(s, g)))
        })
        .map(|n| n.file_name(ModelFormat::Glb))
        .collect();
    proptest::collection::vec(any::<bool>(), all.len()).prop_map(move |mask| {
        all.iter()
            .zip(mask)
            .filter(|(_, keep)| *keep)
            .map(|(name, _)| name.clone())
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every planned copy reads an existing file and writes a missing one.
    #[test]
    fn property_copies_come_from_existing_files(files in library_subset()) {
        let existing = ExistingAssets::from_file_names(&files, ModelFormat::Glb);
        let gaps = missing_stage_models(&ExpectedCatalog::new(), &existing);

        for plan in plan_gaps(&gaps, &existing) {
            if let GapPlan::Copy { source_file, target_file, .. } = plan {
                prop_assert!(files.contains(&source_file), "{} not on disk", source_file);
                prop_assert!(!files.contains(&target_file));
            }
        }
    }

    /// PROPERTY: species without a generic model are never planned.
    #[test]
    fn property_no_generic_no_plan(files in library_subset()) {
        let existing = ExistingAssets::from_file_names(&files, ModelFormat::Glb);
        let gaps = missing_stage_models(&ExpectedCatalog::new(), &existing);

        for plan in plan_gaps(&gaps, &existing) {
            let species = plan.gap().species;
            prop_assert!(existing.contains(&AssetName::generic(species)));
        }
    }

    /// PROPERTY: with the generic model present every gap resolves.
    #[test]
    fn property_generic_resolves_every_gap(files in library_subset()) {
        let existing = ExistingAssets::from_file_names(&files, ModelFormat::Glb);
        let gaps = missing_stage_models(&ExpectedCatalog::new(), &existing);

        for plan in plan_gaps(&gaps, &existing) {
            let is_copy = matches!(plan, GapPlan::Copy { .. });
            prop_assert!(is_copy);
        }
    }
}
