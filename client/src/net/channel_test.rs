use super::*;

const TOPIC: &str = "realtime:global-updates";

fn envelope(event: &str, payload: Value, reference: Option<&str>) -> Envelope {
    Envelope {
        topic: TOPIC.to_owned(),
        event: event.to_owned(),
        payload,
        reference: reference.map(ToOwned::to_owned),
    }
}

// =============================================================
// Outgoing envelopes
// =============================================================

#[test]
fn join_envelope_targets_channel_topic() {
    let join = join_envelope(GLOBAL_CHANNEL, "1");
    assert_eq!(join.topic, TOPIC);
    assert_eq!(join.event, "phx_join");
    assert_eq!(join.reference.as_deref(), Some("1"));
    assert!(join.payload["config"]["presence"].is_object());
}

#[test]
fn envelope_serializes_ref_key() {
    let raw = serde_json::to_value(heartbeat_envelope("7")).unwrap();
    assert_eq!(
        raw,
        serde_json::json!({"topic": "phoenix", "event": "heartbeat", "payload": {}, "ref": "7"})
    );
}

#[test]
fn envelope_parses_without_ref_or_payload() {
    let parsed: Envelope = serde_json::from_str(r#"{"topic":"realtime:x","event":"phx_close"}"#).unwrap();
    assert_eq!(parsed.reference, None);
    assert!(parsed.payload.is_null());
}

#[test]
fn refs_increase_monotonically() {
    let mut counter = 0;
    assert_eq!(next_ref(&mut counter), "1");
    assert_eq!(next_ref(&mut counter), "2");
}

// =============================================================
// Incoming envelopes -> signals
// =============================================================

#[test]
fn ok_reply_to_join_is_subscribed() {
    let reply = envelope("phx_reply", serde_json::json!({"status": "ok", "response": {}}), Some("1"));
    assert_eq!(signals_for(&reply, TOPIC, "1"), vec![ChannelSignal::Subscribed]);
}

#[test]
fn error_reply_to_join_is_closed() {
    let reply = envelope("phx_reply", serde_json::json!({"status": "error"}), Some("1"));
    assert_eq!(signals_for(&reply, TOPIC, "1"), vec![ChannelSignal::Closed]);
}

#[test]
fn reply_to_other_ref_is_ignored() {
    let reply = envelope("phx_reply", serde_json::json!({"status": "ok"}), Some("4"));
    assert!(signals_for(&reply, TOPIC, "1").is_empty());
}

#[test]
fn presence_state_is_sync() {
    let state = envelope("presence_state", serde_json::json!({}), None);
    assert_eq!(signals_for(&state, TOPIC, "1"), vec![ChannelSignal::Sync]);
}

#[test]
fn presence_diff_reports_joins_then_leaves() {
    let diff = envelope(
        "presence_diff",
        serde_json::json!({"joins": {"a": {"metas": []}}, "leaves": {"b": {"metas": []}}}),
        None,
    );
    assert_eq!(
        signals_for(&diff, TOPIC, "1"),
        vec![ChannelSignal::Join, ChannelSignal::Leave]
    );
}

#[test]
fn presence_diff_with_empty_sides_is_silent() {
    let diff = envelope("presence_diff", serde_json::json!({"joins": {}, "leaves": {}}), None);
    assert!(signals_for(&diff, TOPIC, "1").is_empty());
}

#[test]
fn close_and_error_events_are_closed() {
    let close = envelope("phx_close", Value::Null, Some("1"));
    let error = envelope("phx_error", Value::Null, None);
    assert_eq!(signals_for(&close, TOPIC, "1"), vec![ChannelSignal::Closed]);
    assert_eq!(signals_for(&error, TOPIC, "1"), vec![ChannelSignal::Closed]);
}

#[test]
fn other_topics_are_ignored() {
    let mut state = envelope("presence_state", serde_json::json!({}), None);
    state.topic = "phoenix".to_owned();
    assert!(signals_for(&state, TOPIC, "1").is_empty());
}

#[test]
fn broadcast_payloads_carry_no_signal() {
    let broadcast = envelope("broadcast", serde_json::json!({"event": "event_created"}), None);
    assert!(signals_for(&broadcast, TOPIC, "1").is_empty());
}
