//! Terminal output for the binary. Not part of the library API.

pub mod render;
pub mod styles;
