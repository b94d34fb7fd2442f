//! Products Domain
//!
//! Catalogue data shapes. No routes or services are wired to this domain
//! yet; only the entity and its pricing/availability derivations exist.

pub mod models;

pub use models::Product;
