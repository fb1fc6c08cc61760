//! Realtime connectivity state.
//!
//! DESIGN
//! ======
//! Channel lifecycle events are reduced through one transition function so
//! the connected flag always reflects the most recent signal:
//!
//! | signal       | is_connected | last_update |
//! |--------------|--------------|-------------|
//! | `Sync`       | true         | now         |
//! | `Subscribed` | true         | now         |
//! | `Join`       | true         | kept        |
//! | `Leave`      | false        | kept        |
//! | `Closed`     | false        | kept        |
//!
//! `last_update` is the last moment the channel confirmed state, so it
//! survives disconnects and shows how stale the view may be.

#[cfg(test)]
#[path = "realtime_test.rs"]
mod realtime_test;

/// Lifecycle signal reported by the channel client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelSignal {
    /// Full presence state confirmed.
    Sync,
    /// A peer connected.
    Join,
    /// A peer disconnected.
    Leave,
    Subscribed,
    Closed,
}

impl ChannelSignal {
    /// Map a subscription status string to a signal.
    ///
    /// Only `SUBSCRIBED` counts as live; every other status the channel
    /// client reports (`CLOSED`, `CHANNEL_ERROR`, `TIMED_OUT`, ...) is a close.
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        if status.eq_ignore_ascii_case("subscribed") {
            ChannelSignal::Subscribed
        } else {
            ChannelSignal::Closed
        }
    }
}

/// Connectivity flag plus the time (ms since epoch) of the last confirmation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Connectivity {
    pub is_connected: bool,
    pub last_update: Option<f64>,
}

impl Connectivity {
    /// Next state after `signal` observed at `now_ms`.
    #[must_use]
    pub fn apply(self, signal: ChannelSignal, now_ms: f64) -> Self {
        match signal {
            ChannelSignal::Sync | ChannelSignal::Subscribed => {
                Self { is_connected: true, last_update: Some(now_ms) }
            }
            ChannelSignal::Join => Self { is_connected: true, ..self },
            ChannelSignal::Leave | ChannelSignal::Closed => Self { is_connected: false, ..self },
        }
    }

    /// Fold a batch of signals observed together.
    #[must_use]
    pub fn apply_all(self, signals: &[ChannelSignal], now_ms: f64) -> Self {
        signals.iter().fold(self, |state, signal| state.apply(*signal, now_ms))
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.is_connected { "Live" } else { "Offline" }
    }
}
