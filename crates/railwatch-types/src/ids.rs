//! Type-safe identifier wrappers.
//!
//! Trains and segments carry operator-assigned labels ("502", "S1"), so
//! their identifiers wrap a [`String`]. Notifications and feed listeners
//! are generated at runtime and wrap a [`Uuid`] -- UUID v7 (time-ordered)
//! so that newer notifications always compare greater than older ones.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around a [`String`] label with standard derives.
macro_rules! define_label_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from any string-like label.
            pub fn new(label: impl Into<String>) -> Self {
                Self(label.into())
            }

            /// Return the label as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                Self(label.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                Self(label)
            }
        }
    };
}

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_uuid_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_label_id! {
    /// Operator-assigned train number, e.g. `"502"`.
    TrainId
}

define_label_id! {
    /// Rail segment label, e.g. `"S1"`.
    SegmentId
}

define_uuid_id! {
    /// Unique identifier for a dashboard notification.
    NotificationId
}

define_uuid_id! {
    /// Registration handle for a feed listener.
    ListenerId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_ids_compare_by_label() {
        let a = TrainId::from("345");
        let b = TrainId::new("502");
        assert!(a < b);
        assert_eq!(a.as_str(), "345");
        assert_eq!(b.to_string(), "502");
    }

    #[test]
    fn label_id_serde_is_transparent_string() {
        let id = SegmentId::from("S3");
        let json = serde_json::to_string(&id).ok();
        assert_eq!(json.as_deref(), Some("\"S3\""));
    }

    #[test]
    fn uuid_ids_are_time_ordered() {
        let first = NotificationId::new();
        let second = NotificationId::new();
        // UUID v7 embeds a timestamp, so later ids never sort below earlier ones.
        assert!(second >= first);
        assert_ne!(first.into_inner(), Uuid::nil());
    }

    #[test]
    fn uuid_id_display_matches_uuid() {
        let id = ListenerId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }
}
