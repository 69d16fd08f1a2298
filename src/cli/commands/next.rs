//! Next command implementation

use crate::cli::logging::{enabled, log};
use crate::cli::LogLevel;
use crate::config::NextArgs;
use crate::naming::{existing_indices, next_operation_index, ArtifactNamer};

pub fn run_next(args: NextArgs, level: LogLevel) -> Result<(), String> {
    let descriptor = args.run.descriptor(1);
    ArtifactNamer::encode(&descriptor).map_err(|e| format!("Naming error: {e}"))?;

    if enabled(level, LogLevel::Verbose) {
        let used = existing_indices(&args.dir, &descriptor)
            .map_err(|e| format!("Index allocation failed: {e}"))?;
        log(
            level,
            LogLevel::Verbose,
            &format!("Indices in use in {}: {used:?}", args.dir.display()),
        );
    }

    let index = next_operation_index(&args.dir, &descriptor)
        .map_err(|e| format!("Index allocation failed: {e}"))?;
    let name = ArtifactNamer::encode(&descriptor.with_operation_index(index))
        .map_err(|e| format!("Naming error: {e}"))?;

    println!("{index}\t{name}");
    Ok(())
}
