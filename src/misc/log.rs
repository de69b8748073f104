/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, mostly at the `debug` and `trace` levels.
A `trace` is made for every draw from a pool, and so logs of an experiment with many trials are verbose.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [pools](crate::structures::pool)
    pub const POOL: &str = "pool";

    /// Logs related to a single [trial](crate::procedures::trial)
    pub const TRIAL: &str = "trial";

    /// Logs related to [running an experiment](crate::procedures::experiment)
    pub const EXPERIMENT: &str = "experiment";

    /// Logs related to [reading compositions](crate::builder)
    pub const PARSE: &str = "parse";
}
