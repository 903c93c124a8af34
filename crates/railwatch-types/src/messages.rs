//! The feed message envelope.
//!
//! This is the in-process "wire" contract between the update source and
//! its listeners:
//!
//! ```json
//! { "type": "positions", "payload": [ ... ], "ts": "2025-01-20T14:12:03Z" }
//! ```
//!
//! Only `positions` is recognized; any other `type` deserializes to
//! [`FeedMessage::Unknown`] and consumers treat it as a no-op.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::structs::Train;

/// A message fanned out by the update source to every registered listener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeedMessage {
    /// Full replacement snapshot of every tracked train.
    Positions {
        /// The new train states; supersedes the previous snapshot wholesale.
        payload: Vec<Train>,
        /// Generation timestamp of the snapshot.
        ts: DateTime<Utc>,
    },
    /// Catch-all for message types this consumer does not recognize.
    #[serde(other)]
    Unknown,
}

impl FeedMessage {
    /// Wrap a snapshot in a positions message stamped with the current time.
    pub fn positions(payload: Vec<Train>) -> Self {
        Self::Positions {
            payload,
            ts: Utc::now(),
        }
    }

    /// Wrap a snapshot in a positions message with an explicit timestamp.
    pub const fn positions_at(payload: Vec<Train>, ts: DateTime<Utc>) -> Self {
        Self::Positions { payload, ts }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn positions_message_has_wire_shape() {
        let message = FeedMessage::positions(Vec::new());
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["type"], "positions");
        assert!(value["payload"].as_array().is_some());
        assert!(value["ts"].as_str().is_some());
    }

    #[test]
    fn unrecognized_type_parses_as_unknown() {
        let raw = r#"{ "type": "weather", "payload": { "rain": true } }"#;
        let parsed: FeedMessage = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed, FeedMessage::Unknown);
    }
}
