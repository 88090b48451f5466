//! JSON decoding, injected into a client at construction.

use std::fmt;

use serde_json::Value;

/// Error type returned by a [`JsonCodec`].
pub type CodecError = Box<dyn std::error::Error + Send + Sync>;

/// Turns a response body into a JSON value.
///
/// The default is [`SerdeJsonCodec`]; a client takes a different one through
/// `ClientBuilder::json_codec`.
pub trait JsonCodec: fmt::Debug + Send + Sync {
    fn decode(&self, body: &[u8]) -> Result<Value, CodecError>;
}

/// `serde_json` decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonCodec;

impl JsonCodec for SerdeJsonCodec {
    fn decode(&self, body: &[u8]) -> Result<Value, CodecError> {
        Ok(serde_json::from_slice(body)?)
    }
}
