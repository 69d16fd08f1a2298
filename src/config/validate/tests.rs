//! Unit tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use std::path::PathBuf;

fn create_valid_spec() -> LaunchSpec {
    LaunchSpec {
        trainer: TrainerSpec::default(),
        run: RunSpec {
            dataset_path: PathBuf::from("datasets/NCWV2"),
            dataset_name: "NCWV2".to_string(),
            architecture: Architecture::LeNet,
            channels: 3,
            epochs: 2,
            lr: 0.001,
            optimizer: Optimizer::Adam,
            batch_size: 32,
            image_size: 64,
            augmentation_tag: "aug".to_string(),
            operation_index: None,
        },
        output: OutputSpec::default(),
    }
}

#[test]
fn test_valid_config() {
    assert!(validate_config(&create_valid_spec()).is_ok());
}

#[test]
fn test_invalid_epochs() {
    let mut spec = create_valid_spec();
    spec.run.epochs = 0;
    assert_eq!(
        validate_config(&spec).unwrap_err(),
        ValidationError::InvalidEpochs(0)
    );

    spec.run.epochs = 1000;
    assert_eq!(
        validate_config(&spec).unwrap_err(),
        ValidationError::InvalidEpochs(1000)
    );

    spec.run.epochs = 999;
    assert!(validate_config(&spec).is_ok());
}

#[test]
fn test_invalid_learning_rate() {
    let mut spec = create_valid_spec();
    spec.run.lr = 0.0;
    assert!(matches!(
        validate_config(&spec).unwrap_err(),
        ValidationError::InvalidLearningRate(_)
    ));

    spec.run.lr = 1.5;
    assert!(validate_config(&spec).is_err());

    spec.run.lr = f32::NAN;
    assert!(validate_config(&spec).is_err());

    spec.run.lr = 1.0;
    assert!(validate_config(&spec).is_ok());
}

#[test]
fn test_invalid_batch_and_image_size() {
    let mut spec = create_valid_spec();
    spec.run.batch_size = 0;
    assert_eq!(
        validate_config(&spec).unwrap_err(),
        ValidationError::InvalidBatchSize(0)
    );

    let mut spec = create_valid_spec();
    spec.run.image_size = 0;
    assert_eq!(
        validate_config(&spec).unwrap_err(),
        ValidationError::InvalidImageSize(0)
    );
}

#[test]
fn test_invalid_channels() {
    let mut spec = create_valid_spec();
    spec.run.channels = 2;
    assert_eq!(
        validate_config(&spec).unwrap_err(),
        ValidationError::InvalidChannels(2)
    );

    spec.run.channels = 1;
    assert!(validate_config(&spec).is_ok());
}

#[test]
fn test_vgg16_fixed_input() {
    let mut spec = create_valid_spec();
    spec.run.architecture = Architecture::Vgg16;
    assert!(matches!(
        validate_config(&spec).unwrap_err(),
        ValidationError::FixedInputArchitecture { image_size: 64, .. }
    ));

    spec.run.image_size = 224;
    assert!(validate_config(&spec).is_ok());

    spec.run.channels = 1;
    assert!(validate_config(&spec).is_err());
}

#[test]
fn test_zero_operation_index() {
    let mut spec = create_valid_spec();
    spec.run.operation_index = Some(0);
    assert_eq!(
        validate_config(&spec).unwrap_err(),
        ValidationError::InvalidOperationIndex(0)
    );
}

#[test]
fn test_name_fields_must_be_encodable() {
    let mut spec = create_valid_spec();
    spec.run.dataset_name = "NCW_V2".to_string();
    let err = validate_config(&spec).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidNameField {
            field: "dataset_name",
            ..
        }
    ));

    let mut spec = create_valid_spec();
    spec.run.augmentation_tag = String::new();
    assert!(matches!(
        validate_config(&spec).unwrap_err(),
        ValidationError::InvalidNameField {
            field: "augmentation_tag",
            ..
        }
    ));
}

#[test]
fn test_error_messages() {
    let err = ValidationError::InvalidChannels(5);
    assert!(err.to_string().contains("grayscale"));

    let err = ValidationError::FixedInputArchitecture {
        channels: 1,
        image_size: 64,
    };
    assert!(err.to_string().contains("224"));
}
