//! Terminal configuration management.
//!
//! # Sub-modules
//!
//! - [`config_struct`] — Core `Config` struct and its `Default` impl
//! - [`persistence`] — `impl Config` methods for load/save and path resolution
//! - [`profile_methods`] — `impl Config` lookups over profiles, schemes and bindings

pub mod config_struct;
pub mod persistence;
pub mod profile_methods;

pub use config_struct::Config;
