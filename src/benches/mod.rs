//! Suites: small synthetic records and the large dataset.

pub mod large;
pub mod small;
