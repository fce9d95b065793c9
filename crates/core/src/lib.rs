//! Domain layer for the portfolio backend.
//!
//! Holds everything that does not touch the database or HTTP: the error
//! taxonomy, admin form parsing and validation, the compiled-in project
//! catalog and the public listing composition.

pub mod catalog;
pub mod error;
pub mod listing;
pub mod project;
pub mod types;
