//! Generic structures and functions, free from the specifics of the library.

pub mod entropy;
