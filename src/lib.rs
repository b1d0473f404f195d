//! Book renamer - rename book files to names derived from their ISBN
//!
//! # How it works
//! - The ISBN is taken from the file's base name; the extension is kept
//! - Metadata is looked up on the Google Books volume-search endpoint
//! - Only records carrying title, authors and publisher become candidates
//! - When several candidates remain, the user picks one interactively

pub mod catalog;
pub mod error;
pub mod naming;
pub mod prompt;
pub mod rename;

pub use error::RenameError;
