//! Launch configuration loading

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::schema::LaunchSpec;
use crate::error::{Error, Result};

/// Load a launch specification from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LaunchSpec> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::io(format!("reading config {}", path.display()), e),
    })?;

    parse_config(&yaml).map_err(|message| Error::ConfigParsing {
        path: path.to_path_buf(),
        message,
    })
}

/// Parse a launch specification from YAML text
pub fn parse_config(yaml: &str) -> std::result::Result<LaunchSpec, String> {
    serde_yaml::from_str(yaml).map_err(|e| e.to_string())
}
