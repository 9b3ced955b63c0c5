//! core
//!
//! Configuration, validated argument types and local file editing.
//!
//! # Modules
//!
//! - [`config`] - Configuration schema and layered loading
//! - [`types`] - Validated branch, remote and revision arguments
//! - [`ignore`] - Ignore-file editor

pub mod config;
pub mod ignore;
pub mod types;
