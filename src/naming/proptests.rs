//! Property-based tests for artifact naming

use super::*;
use proptest::prelude::*;

fn field_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.-]{1,12}"
}

fn descriptor_strategy() -> impl Strategy<Value = TrainingRunDescriptor> {
    (
        field_strategy(),
        field_strategy(),
        1u32..=4,
        0u32..=MAX_EPOCHS,
        field_strategy(),
        1u32..=10_000,
    )
        .prop_map(|(dataset, arch, channels, epochs, aug, index)| {
            TrainingRunDescriptor::new(dataset, arch, channels, epochs, aug, index)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_decode_inverts_encode(run in descriptor_strategy()) {
        let name = ArtifactNamer::encode(&run).unwrap();
        prop_assert_eq!(ArtifactNamer::decode(&name).unwrap(), run);
    }

    #[test]
    fn prop_encoded_name_shape(run in descriptor_strategy()) {
        let name = ArtifactNamer::encode(&run).unwrap();
        prop_assert!(name.ends_with(EXTENSION));
        let expected_epochs = format!("_it{:03}_", run.num_epochs);
        prop_assert!(name.contains(&expected_epochs));
        prop_assert_eq!(name.matches(DELIMITER).count(), 5);
    }

    #[test]
    fn prop_delimiter_in_field_rejected(
        run in descriptor_strategy(),
        prefix in field_strategy(),
        which in 0usize..3,
    ) {
        let mut run = run;
        let poisoned = format!("{prefix}_x");
        match which {
            0 => run.dataset_name = poisoned,
            1 => run.architecture_name = poisoned,
            _ => run.augmentation_tag = poisoned,
        }
        let is_invalid_field = matches!(
            ArtifactNamer::encode(&run),
            Err(NamingError::InvalidField { .. })
        );
        prop_assert!(is_invalid_field);
    }

    #[test]
    fn prop_epochs_over_limit_rejected(run in descriptor_strategy(), epochs in 1000u32..100_000) {
        let mut run = run;
        run.num_epochs = epochs;
        prop_assert!(ArtifactNamer::encode(&run).is_err());
    }

    #[test]
    fn prop_decode_never_panics(name in "\\PC{0,40}") {
        let _ = ArtifactNamer::decode(&name);
    }
}
