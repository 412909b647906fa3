//! Infrastructure adapters: tabular trip sources, credential resolution,
//! and the caching decorator that bounds refetching.

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cache;
pub mod credentials;
pub mod csv_source;
pub mod schema;
pub mod sheet_source;

pub use cache::CachedTripSource;
pub use credentials::{
    CredentialResolver, EnvCredentialProvider, FileCredentialProvider, SecretDirProvider,
};
pub use csv_source::CsvTripSource;
pub use schema::ColumnMap;
pub use sheet_source::SheetTripSource;
