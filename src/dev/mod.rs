//! The device module contains the internals for each of the supported shift registers.
//!
//! In most cases you will not need anything from here explicitly, the exposed types at the root of
//! the crate should be enough.

pub mod hc595;
