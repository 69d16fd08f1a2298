//! Canonical artifact naming
//!
//! Maps a [`TrainingRunDescriptor`] to the on-disk name of the model file the
//! trainer produces, and back:
//!
//! ```text
//! {dataset}_{architecture}_ch{channels}_it{epochs:03}_{augmentation}_{index:02}.h5
//! ```
//!
//! # Example
//!
//! ```
//! use rotulo::naming::{ArtifactNamer, TrainingRunDescriptor};
//!
//! let run = TrainingRunDescriptor::new("NCWV2", "lenet", 3, 2, "aug", 1);
//! let name = ArtifactNamer::encode(&run)?;
//! assert_eq!(name, "NCWV2_lenet_ch3_it002_aug_01.h5");
//! assert_eq!(ArtifactNamer::decode(&name)?, run);
//! # Ok::<(), rotulo::naming::NamingError>(())
//! ```

mod descriptor;
mod error;
mod index;
mod namer;

#[cfg(test)]
mod proptests;

pub use descriptor::TrainingRunDescriptor;
pub use error::NamingError;
pub use index::{existing_indices, next_operation_index};
pub use namer::{ArtifactNamer, DELIMITER, EPOCH_WIDTH, EXTENSION, INDEX_WIDTH, MAX_EPOCHS};
