//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Insert shapes are validated in `portfolio_core`.

pub mod project;
