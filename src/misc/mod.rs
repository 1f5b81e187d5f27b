//! Miscellaneous utilities.

pub mod log;
