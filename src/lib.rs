//! `within` - turn-by-turn descriptions of street network routes.
//!
//! Rust users get the [`within_core`] API re-exported here. With the
//! `python` feature the crate also builds the `within` Python extension
//! module.

pub use within_core::*;

#[cfg(feature = "python")]
mod python;
