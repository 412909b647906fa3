//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`trip_source`]: Tabular trip data retrieval
//! - [`credentials`]: Access material resolution for protected sources
//!
//! These ports keep the domain and application layers independent of any
//! specific data source or secret store.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod credentials;
pub mod trip_source;
