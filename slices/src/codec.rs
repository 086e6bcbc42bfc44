//! String codecs for persisted values.
//!
//! DESIGN
//! ======
//! Decoding is fail-soft at the call site: [`Codec::decode_or`] swallows every
//! error and hands back the caller's default, so a corrupted or foreign value
//! in storage can only ever reset its own slice.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error returned by [`Codec::encode`] and [`Codec::decode`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw string is not valid JSON for the target type.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    /// The raw string does not parse as the target scalar.
    #[error("unparseable value {raw:?}")]
    Unparseable { raw: String },
    /// The value parsed but failed the codec's shape check.
    #[error("value rejected by shape check")]
    Shape,
}

/// Converts between an in-memory value and its stored string form.
pub trait Codec<T> {
    /// Serialize `value`. `Ok(None)` means there is nothing to store and the
    /// key should be removed.
    fn encode(&self, value: &T) -> Result<Option<String>, CodecError>;

    /// Parse a stored string.
    fn decode(&self, raw: &str) -> Result<T, CodecError>;

    /// Parse `raw`, falling back to `default` when it is absent or invalid.
    fn decode_or(&self, raw: Option<&str>, default: T) -> T {
        let Some(raw) = raw else {
            return default;
        };
        match self.decode(raw) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("stored value discarded, using default: {e}");
                default
            }
        }
    }
}

/// Optional repair/reject hook run after a successful JSON parse.
pub type ShapeCheck<T> = fn(T) -> Option<T>;

/// JSON codec for structured values.
pub struct JsonCodec<T> {
    shape: Option<ShapeCheck<T>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonCodec<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { shape: None, _marker: PhantomData }
    }

    /// Attach a shape check. It returns the (possibly repaired) value, or
    /// `None` to reject it.
    #[must_use]
    pub fn with_shape(mut self, shape: ShapeCheck<T>) -> Self {
        self.shape = Some(shape);
        self
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonCodec<T> {
    fn clone(&self) -> Self {
        Self { shape: self.shape, _marker: PhantomData }
    }
}

impl<T> fmt::Debug for JsonCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonCodec")
            .field("shape_checked", &self.shape.is_some())
            .finish()
    }
}

impl<T: Serialize + DeserializeOwned> Codec<T> for JsonCodec<T> {
    fn encode(&self, value: &T) -> Result<Option<String>, CodecError> {
        Ok(Some(serde_json::to_string(value)?))
    }

    fn decode(&self, raw: &str) -> Result<T, CodecError> {
        let value: T = serde_json::from_str(raw)?;
        match self.shape {
            Some(check) => check(value).ok_or(CodecError::Shape),
            None => Ok(value),
        }
    }
}

/// Plain-text codec for scalars with `FromStr`/`Display` (flags, enums).
///
/// `bool` round-trips as the literal strings `"true"` and `"false"`.
pub struct TextCodec<T>(PhantomData<fn() -> T>);

impl<T> TextCodec<T> {
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for TextCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TextCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TextCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TextCodec")
    }
}

impl<T: FromStr + Display> Codec<T> for TextCodec<T> {
    fn encode(&self, value: &T) -> Result<Option<String>, CodecError> {
        Ok(Some(value.to_string()))
    }

    fn decode(&self, raw: &str) -> Result<T, CodecError> {
        raw.parse::<T>().map_err(|_| CodecError::Unparseable { raw: raw.to_owned() })
    }
}

/// Identity codec for an optional string payload. `None` removes the key.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptionalTextCodec;

impl Codec<Option<String>> for OptionalTextCodec {
    fn encode(&self, value: &Option<String>) -> Result<Option<String>, CodecError> {
        Ok(value.clone())
    }

    fn decode(&self, raw: &str) -> Result<Option<String>, CodecError> {
        if raw.is_empty() {
            return Ok(None);
        }
        Ok(Some(raw.to_owned()))
    }
}
