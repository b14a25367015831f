//! Service layer providing the catalog operations on top of models.
//! - Separates business rules (the active-record integrity check) from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types for the transport layer to map onto HTTP.

pub mod catalog;
pub mod errors;
#[cfg(test)]
pub mod test_support;
