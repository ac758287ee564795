//! Statistics reporting module.
//!
//! The tracker engine reports what it does through the [`StatsReporter`](traits::stats_reporter::StatsReporter)
//! trait, injected at construction. [`StatsAtomics`](structs::stats_atomics::StatsAtomics)
//! is the bundled implementation: lock-free counters that the boot code
//! prints to the console every `log_console_interval` seconds.

pub mod enums;
pub mod impls;
pub mod structs;
pub mod traits;

/// Unit tests for the counters.
pub mod tests;
