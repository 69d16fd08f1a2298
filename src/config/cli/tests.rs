//! Tests for CLI argument parsing

use super::*;
use crate::config::{parse_config, Optimizer};
use std::path::PathBuf;

#[test]
fn test_parse_name_command() {
    let cli = parse_args([
        "rotulo", "name", "--dataset", "NCWV2", "--arch", "lenet", "--epochs", "2",
    ])
    .unwrap();
    match cli.command {
        Command::Name(args) => {
            assert_eq!(args.run.dataset, "NCWV2");
            assert_eq!(args.run.arch, "lenet");
            assert_eq!(args.run.channels, 3);
            assert_eq!(args.run.epochs, 2);
            assert_eq!(args.run.aug, "aug");
            assert_eq!(args.index, None);
            assert_eq!(args.dir, None);
        }
        _ => panic!("Expected Name command"),
    }
}

#[test]
fn test_parse_name_short_flags() {
    let cli = parse_args([
        "rotulo", "name", "-d", "NCWV2", "-a", "minivgg", "-c", "1", "-e", "15", "-i", "3",
        "--aug", "noaug",
    ])
    .unwrap();
    match cli.command {
        Command::Name(args) => {
            assert_eq!(args.run.channels, 1);
            assert_eq!(args.run.aug, "noaug");
            assert_eq!(args.index, Some(3));
            assert_eq!(
                args.run.descriptor(3).file_name().unwrap(),
                "NCWV2_minivgg_ch1_it015_noaug_03.h5"
            );
        }
        _ => panic!("Expected Name command"),
    }
}

#[test]
fn test_name_index_conflicts_with_dir() {
    let result = parse_args([
        "rotulo", "name", "-d", "NCWV2", "-a", "lenet", "-e", "2", "--index", "1", "--dir",
        "models",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_parse_command() {
    let cli = parse_args([
        "rotulo",
        "parse",
        "NCWV2_lenet_ch3_it002_aug_01.h5",
        "--format",
        "json",
    ])
    .unwrap();
    match cli.command {
        Command::Parse(args) => {
            assert_eq!(args.name, PathBuf::from("NCWV2_lenet_ch3_it002_aug_01.h5"));
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("Expected Parse command"),
    }
}

#[test]
fn test_parse_next_requires_dir() {
    assert!(parse_args(["rotulo", "next", "-d", "NCWV2", "-a", "lenet", "-e", "2"]).is_err());

    let cli = parse_args([
        "rotulo", "next", "-d", "NCWV2", "-a", "lenet", "-e", "2", "--dir", "models",
    ])
    .unwrap();
    match cli.command {
        Command::Next(args) => assert_eq!(args.dir, PathBuf::from("models")),
        _ => panic!("Expected Next command"),
    }
}

#[test]
fn test_parse_launch_with_overrides() {
    let cli = parse_args([
        "rotulo",
        "launch",
        "launch.yaml",
        "--epochs",
        "10",
        "--lr",
        "0.01",
        "--optimizer",
        "adam",
        "--index",
        "7",
        "--artifact-dir",
        "models",
        "--dry-run",
    ])
    .unwrap();

    match cli.command {
        Command::Launch(args) => {
            assert_eq!(args.config, PathBuf::from("launch.yaml"));
            assert_eq!(args.epochs, Some(10));
            assert!((args.lr.unwrap() - 0.01).abs() < 1e-6);
            assert_eq!(args.optimizer, Some(Optimizer::Adam));
            assert_eq!(args.index, Some(7));
            assert_eq!(args.artifact_dir, Some(PathBuf::from("models")));
            assert!(args.dry_run);
        }
        _ => panic!("Expected Launch command"),
    }
}

#[test]
fn test_parse_launch_rejects_unknown_optimizer() {
    assert!(parse_args(["rotulo", "launch", "launch.yaml", "--optimizer", "rmsprop"]).is_err());
}

#[test]
fn test_parse_validate_and_info() {
    let cli = parse_args(["rotulo", "validate", "launch.yaml", "--detailed"]).unwrap();
    match cli.command {
        Command::Validate(args) => assert!(args.detailed),
        _ => panic!("Expected Validate command"),
    }

    let cli = parse_args(["rotulo", "info", "launch.yaml", "-f", "yaml"]).unwrap();
    match cli.command {
        Command::Info(args) => assert_eq!(args.format, OutputFormat::Yaml),
        _ => panic!("Expected Info command"),
    }
}

#[test]
fn test_parse_completion() {
    let cli = parse_args(["rotulo", "completion", "zsh"]).unwrap();
    match cli.command {
        Command::Completion(args) => assert_eq!(args.shell, ShellType::Zsh),
        _ => panic!("Expected Completion command"),
    }
    assert!(parse_args(["rotulo", "completion", "tcsh"]).is_err());
}

#[test]
fn test_global_flags() {
    let cli = parse_args(["rotulo", "-v", "validate", "launch.yaml"]).unwrap();
    assert!(cli.verbose);
    assert!(!cli.quiet);

    let cli = parse_args(["rotulo", "validate", "launch.yaml", "-q"]).unwrap();
    assert!(cli.quiet);
}

#[test]
fn test_unknown_command() {
    assert!(parse_args(["rotulo", "train"]).is_err());
}

#[test]
fn test_apply_overrides() {
    let mut spec = parse_config(
        r#"
run:
  dataset_path: datasets/NCWV2
  dataset_name: NCWV2
  architecture: lenet
  epochs: 2
"#,
    )
    .unwrap();

    let cli = parse_args([
        "rotulo", "launch", "launch.yaml", "-e", "5", "-o", "adam", "-i", "4",
    ])
    .unwrap();
    let Command::Launch(args) = cli.command else {
        panic!("Expected Launch command");
    };

    apply_overrides(&mut spec, &args);
    assert_eq!(spec.run.epochs, 5);
    assert_eq!(spec.run.optimizer, Optimizer::Adam);
    assert_eq!(spec.run.operation_index, Some(4));
    assert!((spec.run.lr - 0.001).abs() < 1e-9);
    assert_eq!(spec.output.artifact_dir, PathBuf::from("output/models"));
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert!("xml".parse::<OutputFormat>().is_err());
}
