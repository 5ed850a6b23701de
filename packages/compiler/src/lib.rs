#![deny(clippy::all)]

//! A template-to-instruction compiler.
//!
//! Templates are parsed and ingested into an op-based intermediate representation, which the
//! [`template::pipeline`] lowers into the final rendering instruction sequence: creation ops for
//! instantiating a view and update ops for change detection.

pub mod core;
pub mod i18n;
pub mod schema;
pub mod template;
pub mod view;
