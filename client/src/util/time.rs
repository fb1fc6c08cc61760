//! Wall-clock helpers for connectivity timestamps.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Format an epoch-millisecond timestamp as `HH:MM:SS` UTC.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_clock(ms: f64) -> String {
    if !ms.is_finite() || ms < 0.0 {
        return "--:--:--".to_owned();
    }
    let secs_of_day = (ms / 1000.0) as u64 % 86_400;
    format!(
        "{:02}:{:02}:{:02}",
        secs_of_day / 3600,
        (secs_of_day / 60) % 60,
        secs_of_day % 60
    )
}
