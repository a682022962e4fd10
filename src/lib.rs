//! TypeDefCache - A thread-safe in-memory index of open metadata type definitions
//!
//! This crate provides the type-definition cache consumed by a metadata
//! repository connector: lookup of type definitions by GUID or name, supertype
//! chain resolution, per-property storage keywords, and lazily built
//! instance-type summaries.

pub mod archive;
pub mod cache;
pub mod config;
pub mod core;
pub mod utils;

pub use archive::{ArchiveLoadReport, TypeDefArchive};
pub use cache::{PropertyKeywords, TypeDefCache};
pub use config::Config;
