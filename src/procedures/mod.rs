//! Procedures, implemented on a context.
//!
//! For the moment the only procedure is [closure] expansion.
//! Generations are sequentially dependent --- generation *n + 1* requires the complete generation *n* --- so the procedure is synchronous and single-threaded, and cancellation is expressed purely through the configured bounds.

pub mod closure;
