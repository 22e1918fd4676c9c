#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the prs-core crate.
//! [prs_core]: https://docs.rs/prs_core/latest/prs_core/index.html
//! [prs_sqlite]: https://docs.rs/prs_sqlite/latest/prs_sqlite/index.html
//! [prs_axum]: https://docs.rs/prs_axum/latest/prs_axum/index.html
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for price resolution.
///
/// This module contains the value objects (identifiers, amounts, validity
/// windows) and the price record itself. Every type that carries an invariant
/// can only be obtained through a validating constructor, so a value that
/// exists is a value that is valid.
pub mod models;

/// Interface traits for the price resolution service.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the domain logic and external adapters
/// (such as databases or HTTP servers) without specifying implementation details.
/// The resolver never talks to storage directly; it only sees the candidates a
/// [`ports::PriceRepository`] hands back.
pub mod ports;

mod resolver;
pub use resolver::{PriceNotFound, resolve};

pub mod service;
