//! Engine-wide constants and defaults.

pub mod constants;
