use crate::stats::enums::stats_event::StatsEvent;

/// Receiver of engine statistics. `value` may be negative.
#[cfg_attr(test, mockall::automock)]
pub trait StatsReporter: Send + Sync {
    fn update_stats(&self, event: StatsEvent, value: i64);
}
