//! Bibliographic catalog lookup.

mod client;

pub use client::{CatalogClient, Volume, VolumeInfo};
