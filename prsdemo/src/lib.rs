#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the prs crates.
//! [prs_axum]: https://docs.rs/prs_axum/latest/prs_axum/index.html
//! [prs_sqlite]: https://docs.rs/prs_sqlite/latest/prs_sqlite/index.html
#![doc = include_str!("../README.md")]

pub mod impls;

mod cli;
pub use cli::Cli;

mod config;
pub use config::AppConfig;
