//! Extension handling and input-to-output path mapping

pub mod extension;
pub mod mapping;

pub use extension::{canonicalize_extension, has_extension, strip_path_and_extension, Extension};
pub use mapping::{derive_output_path, mirrored_output_path, ConversionJob};
