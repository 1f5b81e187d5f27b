/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [closure expansion](crate::procedures::closure)
    pub const CLOSURE: &str = "closure";

    /// Logs related to the [expression database](crate::db::expression)
    pub const EXPRESSION: &str = "expression";

    /// Logs related to [validation](crate::validation)
    pub const VALIDATION: &str = "validation";

    /// Logs related to the [oscillator](crate::structures::oscillator)
    pub const OSCILLATOR: &str = "oscillator";
}
