//! Core text primitives consumed by the high-level `api` module.
pub mod casing;
