//! Realtime connectivity tracker and its indicator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RealtimeTracker` is mounted once by the top-level layout. It owns the
//! channel subscription for as long as it is mounted and provides a read-only
//! `ReadSignal<Connectivity>` to descendants; only the channel task writes it.

#[cfg(test)]
#[path = "connection_status_test.rs"]
mod connection_status_test;

use leptos::prelude::*;

use crate::net::channel::Subscription;
use crate::state::realtime::Connectivity;
use crate::util::time::format_clock;

/// Subscribe to the global channel for the lifetime of this component.
#[component]
pub fn RealtimeTracker(children: Children) -> impl IntoView {
    let (connectivity, set_connectivity) = signal(Connectivity::default());
    provide_context(connectivity);

    #[cfg(feature = "hydrate")]
    {
        close_on_cleanup(crate::net::channel::spawn_channel(set_connectivity));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_connectivity;

    children()
}

/// Close `subscription` when the current owner is disposed.
pub fn close_on_cleanup(subscription: impl Subscription) {
    on_cleanup(move || subscription.close());
}

/// Dot + label showing whether the realtime channel is live.
#[component]
pub fn ConnectionIndicator() -> impl IntoView {
    let connectivity = expect_context::<ReadSignal<Connectivity>>();

    let dot_class = move || {
        if connectivity.get().is_connected {
            "connection__dot connection__dot--live"
        } else {
            "connection__dot connection__dot--offline"
        }
    };
    let label = move || connectivity.get().label();
    let updated = move || {
        connectivity
            .get()
            .last_update
            .map(|ms| format!("updated {} UTC", format_clock(ms)))
            .unwrap_or_default()
    };

    view! {
        <span class="connection" title=updated>
            <span class=dot_class></span>
            {label}
        </span>
    }
}
