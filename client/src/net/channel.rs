//! Realtime channel client used for connectivity tracking.
//!
//! The backend's realtime service speaks JSON envelopes
//! (`{topic, event, payload, ref}`) over a websocket. This module joins one
//! channel, keeps the socket alive with heartbeats, and reduces the envelopes
//! it receives to [`ChannelSignal`]s. Presence payloads are not interpreted
//! beyond "someone joined" / "someone left".
//!
//! The websocket task is gated behind `#[cfg(feature = "hydrate")]`; envelope
//! translation is pure and shared with tests.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::realtime::ChannelSignal;

/// Broadcast channel watched for connectivity.
pub const GLOBAL_CHANNEL: &str = "global-updates";
pub const HEARTBEAT_INTERVAL_SECS: u64 = 25;

const HEARTBEAT_TOPIC: &str = "phoenix";

/// One realtime protocol message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub topic: String,
    pub event: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
}

/// Topic name the service uses for `channel`.
#[must_use]
pub fn channel_topic(channel: &str) -> String {
    format!("realtime:{channel}")
}

/// Subscription request for `channel` with presence tracking enabled.
#[must_use]
pub fn join_envelope(channel: &str, reference: &str) -> Envelope {
    Envelope {
        topic: channel_topic(channel),
        event: "phx_join".to_owned(),
        payload: serde_json::json!({
            "config": {
                "broadcast": { "self": false },
                "presence": { "key": "" }
            }
        }),
        reference: Some(reference.to_owned()),
    }
}

#[must_use]
pub fn heartbeat_envelope(reference: &str) -> Envelope {
    Envelope {
        topic: HEARTBEAT_TOPIC.to_owned(),
        event: "heartbeat".to_owned(),
        payload: serde_json::json!({}),
        reference: Some(reference.to_owned()),
    }
}

/// Reduce an incoming envelope to tracker signals.
///
/// Envelopes for other topics, replies to anything but our join, and events
/// with no connectivity meaning yield no signals.
#[must_use]
pub fn signals_for(envelope: &Envelope, topic: &str, join_ref: &str) -> Vec<ChannelSignal> {
    if envelope.topic != topic {
        return Vec::new();
    }

    match envelope.event.as_str() {
        "phx_reply" if envelope.reference.as_deref() == Some(join_ref) => {
            let ok = envelope.payload.get("status").and_then(Value::as_str) == Some("ok");
            let status = if ok { "SUBSCRIBED" } else { "CHANNEL_ERROR" };
            vec![ChannelSignal::from_status(status)]
        }
        "presence_state" => vec![ChannelSignal::Sync],
        "presence_diff" => {
            let mut signals = Vec::new();
            if has_entries(&envelope.payload, "joins") {
                signals.push(ChannelSignal::Join);
            }
            if has_entries(&envelope.payload, "leaves") {
                signals.push(ChannelSignal::Leave);
            }
            signals
        }
        "phx_close" => vec![ChannelSignal::from_status("CLOSED")],
        "phx_error" => vec![ChannelSignal::from_status("CHANNEL_ERROR")],
        _ => Vec::new(),
    }
}

fn has_entries(payload: &Value, key: &str) -> bool {
    payload
        .get(key)
        .and_then(Value::as_object)
        .is_some_and(|entries| !entries.is_empty())
}

#[cfg(any(test, feature = "hydrate"))]
fn next_ref(counter: &mut u64) -> String {
    *counter += 1;
    counter.to_string()
}

/// A running subscription that can be torn down.
pub trait Subscription: Send + Sync + 'static {
    /// Stop the subscription. Closing twice is harmless.
    fn close(&self);
}

/// Owns a running subscription; closing it drops the socket.
#[cfg(feature = "hydrate")]
pub struct ChannelHandle {
    abort: futures::future::AbortHandle,
}

#[cfg(feature = "hydrate")]
impl Subscription for ChannelHandle {
    fn close(&self) {
        self.abort.abort();
    }
}

/// Spawn the subscription task for the global channel.
///
/// Every signal is folded into `connectivity`. The task ends, and reports
/// `Closed`, when the socket ends; there is no reconnect.
#[cfg(feature = "hydrate")]
pub fn spawn_channel(
    connectivity: leptos::prelude::WriteSignal<crate::state::realtime::Connectivity>,
) -> ChannelHandle {
    let (task, abort) = futures::future::abortable(run_channel(connectivity));
    leptos::task::spawn_local(async move {
        let _ = task.await;
    });
    ChannelHandle { abort }
}

#[cfg(feature = "hydrate")]
fn publish(
    connectivity: leptos::prelude::WriteSignal<crate::state::realtime::Connectivity>,
    signals: &[ChannelSignal],
) {
    use leptos::prelude::Update;

    let now = crate::util::time::now_ms();
    // A disposed signal means the tracker unmounted; drop the update.
    connectivity.try_update(|state| *state = state.apply_all(signals, now));
}

#[cfg(feature = "hydrate")]
async fn run_channel(connectivity: leptos::prelude::WriteSignal<crate::state::realtime::Connectivity>) {
    match crate::net::api::fetch_client_config().await {
        Ok(config) => {
            if let Err(e) = subscribe(&config, connectivity).await {
                leptos::logging::warn!("realtime channel error: {e}");
            }
        }
        Err(e) => leptos::logging::warn!("realtime config unavailable: {e}"),
    }
    publish(connectivity, &[ChannelSignal::from_status("CLOSED")]);
}

#[cfg(feature = "hydrate")]
async fn subscribe(
    config: &crate::net::types::ClientConfig,
    connectivity: leptos::prelude::WriteSignal<crate::state::realtime::Connectivity>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(&config.realtime_url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    let topic = channel_topic(&config.channel);
    let mut counter = 0_u64;
    let join_ref = next_ref(&mut counter);
    let join = serde_json::to_string(&join_envelope(&config.channel, &join_ref)).map_err(|e| e.to_string())?;
    ws_write.send(Message::Text(join)).await.map_err(|e| e.to_string())?;

    let heartbeat = async {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(HEARTBEAT_INTERVAL_SECS)).await;
            let Ok(beat) = serde_json::to_string(&heartbeat_envelope(&next_ref(&mut counter))) else {
                break;
            };
            if ws_write.send(Message::Text(beat)).await.is_err() {
                break;
            }
        }
    };

    let receive = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Ok(envelope) = serde_json::from_str::<Envelope>(&text) {
                        let signals = signals_for(&envelope, &topic, &join_ref);
                        if !signals.is_empty() {
                            publish(connectivity, &signals);
                        }
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("realtime recv error: {e}");
                    break;
                }
            }
        }
    };

    // Whichever side stops first ends the subscription.
    futures::future::select(Box::pin(heartbeat), Box::pin(receive)).await;
    Ok(())
}
