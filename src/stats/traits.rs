pub mod stats_reporter;
