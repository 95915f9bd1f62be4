/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the crate.
These are intended to provide useful information when investigating how a
formula was resolved into gates, or why recognition of some candidate
failed.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [DIMACS parsing](crate::builder::dimacs).
    pub const PARSER: &str = "parser";

    /// Logs related to the [clause index](crate::index).
    pub const INDEX: &str = "index";

    /// Logs related to the [gate analyzer](crate::gates::analyzer).
    pub const ANALYZER: &str = "analyzer";

    /// Logs related to the [semantic oracle](crate::oracle).
    pub const ORACLE: &str = "oracle";

    /// Logs related to [feature extraction](crate::features).
    pub const FEATURES: &str = "features";
}
