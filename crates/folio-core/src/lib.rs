//! # Folio Core
//!
//! The domain layer of the Folio blog.
//! This crate contains the post model, query rules and the content query
//! service. Storage is reached only through the [`ports::PostStore`] trait.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::ContentQueryService;
