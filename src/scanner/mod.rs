//! Recursive discovery of input files

pub mod directory;
pub mod filter;

pub use directory::find_files_with_extension;
