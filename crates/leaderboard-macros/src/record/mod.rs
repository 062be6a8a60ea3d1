//! Implementation of the `#[derive(Record)]` macro.
//!
//! This module generates the static schema table, field name constants and
//! field accessor for a record struct from its `#[record(...)]` annotations.

mod attrs;
mod derive;

pub use derive::record_derive_impl;
