//! Shared types for the credit card entry form.
//!
//! Everything here is plain Rust with no browser dependencies, so the
//! behaviour of the form (field edits, phase navigation, saving, CSV export,
//! viewer geometry) can be exercised with `cargo test -p contracts`.

pub mod domain;
pub mod shared;
