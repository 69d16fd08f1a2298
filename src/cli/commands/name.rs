//! Name command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::NameArgs;
use crate::naming::{next_operation_index, ArtifactNamer};

/// Resolve the artifact name requested by `args`
pub fn resolve_name(args: &NameArgs, level: LogLevel) -> Result<String, String> {
    let index = match (&args.dir, args.index) {
        (Some(dir), _) => {
            let index = next_operation_index(dir, &args.run.descriptor(1))
                .map_err(|e| format!("Index allocation failed: {e}"))?;
            log(
                level,
                LogLevel::Verbose,
                &format!("Allocated operation index {index} from {}", dir.display()),
            );
            index
        }
        (None, Some(index)) => index,
        (None, None) => 1,
    };

    ArtifactNamer::encode(&args.run.descriptor(index)).map_err(|e| format!("Naming error: {e}"))
}

pub fn run_name(args: NameArgs, level: LogLevel) -> Result<(), String> {
    let name = resolve_name(&args, level)?;
    println!("{name}");
    Ok(())
}
