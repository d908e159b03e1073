//! Shared API response types
//!
//! The wire contract for both catalog endpoints is a two-element JSON
//! array: `[true, payload]` on success, `[false, message]` on failure.
//! Internally the outcome is a tagged enum; the positional shape exists
//! only at serialization time.

use serde::ser::{Serialize, SerializeTuple, Serializer};
use tracing::error;

use crate::{Error, Result};

/// Tagged success/failure result for a catalog operation
#[derive(Debug, Clone)]
pub enum Envelope<T> {
    Success(T),
    Failure(String),
}

impl<T> Envelope<T> {
    /// Convert an operation error into the failure envelope.
    ///
    /// Server faults are logged with full detail here; the caller only
    /// ever sees the user-safe message.
    pub fn from_error(err: Error) -> Self {
        if err.is_server_fault() {
            error!("request failed: {}", err);
        }
        Envelope::Failure(err.user_message())
    }

    /// Wrap an operation result in the envelope
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(payload) => Envelope::Success(payload),
            Err(err) => Envelope::from_error(err),
        }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(2)?;
        match self {
            Envelope::Success(payload) => {
                tup.serialize_element(&true)?;
                tup.serialize_element(payload)?;
            }
            Envelope::Failure(message) => {
                tup.serialize_element(&false)?;
                tup.serialize_element(message)?;
            }
        }
        tup.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_as_true_then_payload() {
        let envelope = Envelope::Success(vec![1, 2, 3]);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!([true, [1, 2, 3]]));
    }

    #[test]
    fn failure_serializes_as_false_then_message() {
        let envelope: Envelope<Vec<i64>> = Envelope::Failure("missing classid".to_string());
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!([false, "missing classid"]));
    }

    #[test]
    fn server_faults_collapse_to_generic_message() {
        let envelope: Envelope<()> =
            Envelope::from_error(Error::Internal("connection dropped".to_string()));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!([
                false,
                "A server error occurred. Please contact the system administrator."
            ])
        );
    }

    #[test]
    fn not_found_echoes_the_identifier() {
        let envelope: Envelope<()> = Envelope::from_error(Error::NoSuchClass(99999));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!([false, "no class with classid 99999 exists"]));
    }
}
