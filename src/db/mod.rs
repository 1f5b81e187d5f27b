//! Databases for closure expansion.

pub mod expression;
