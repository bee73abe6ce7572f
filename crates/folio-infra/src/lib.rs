//! # Folio Infrastructure
//!
//! Concrete implementations of the ports defined in `folio-core`.
//! Posts live in process memory and are reseeded from the demo set on start.

pub mod seed;
pub mod store;

pub use store::InMemoryPostStore;
