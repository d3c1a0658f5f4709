//! Optional wrapper for nullable model fields.
//!
//! Directus distinguishes between a field that is absent from a write body
//! (left untouched), a field explicitly set to `null`, and a field set to a
//! value. Plain `Option<T>` cannot express all three, and reference-typed
//! fields are rejected by the field-path deriver, so nullable fields are
//! declared with [`Optional`] instead.
//!
//! Invariants:
//! - `Unset` never reaches the wire when paired with
//!   `#[serde(default, skip_serializing_if = "Optional::is_unset")]`.
//! - As a declared field, the wrapper contributes exactly one path: its own.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SchemaError;

/// The three wrapper states, reported through [`OptionalValue::presence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// The field was not provided at all.
    Unset,
    /// The field was explicitly set to null.
    Null,
    /// The field holds a value.
    Value,
}

/// Capability implemented by optional wrapper types.
///
/// The deriver consults the *type* (not an instance) for the field paths it
/// contributes under a given prefix, so path enumeration is an associated
/// function. The presence check is the instance side of the contract, used
/// when deciding how a value should be encoded.
pub trait OptionalValue {
    /// Which wrapper state this value is in.
    fn presence(&self) -> Presence;

    /// The field paths contributed when this type is declared at `prefix`.
    fn field_paths(prefix: &str) -> Result<Vec<String>, SchemaError>
    where
        Self: Sized;
}

/// A nullable field that distinguishes unset, null, and present values.
///
/// # Declaring on a model
///
/// ```
/// use directus_client::schema::Optional;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct ArticleDraft {
///     title: String,
///     #[serde(default, skip_serializing_if = "Optional::is_unset")]
///     subtitle: Optional<String>,
/// }
/// ```
///
/// With the serde attributes above, `Unset` fields disappear from request
/// bodies entirely, `Null` serializes as JSON `null`, and missing or `null`
/// response fields deserialize back to `Unset` and `Null` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Optional<T> {
    /// No value provided; the field stays out of encoded bodies.
    #[default]
    Unset,
    /// An explicit null, encoded as JSON `null`.
    Null,
    /// A present value.
    Value(T),
}

impl<T> Optional<T> {
    /// True when no value was provided.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// True for an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True when a value is present.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Borrow the contained value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Consume the wrapper, yielding the contained value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// `None` maps to an explicit null, not to `Unset`: an `Option` in hand is
/// an explicit value-or-null decision, while absence is expressed by
/// `Optional::default()`.
impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }
}

impl<T> OptionalValue for Optional<T> {
    fn presence(&self) -> Presence {
        match self {
            Self::Unset => Presence::Unset,
            Self::Null => Presence::Null,
            Self::Value(_) => Presence::Value,
        }
    }

    // Leaf behavior for every wrapped type: the wrapper contributes the
    // field's own joined path and nothing below it.
    fn field_paths(prefix: &str) -> Result<Vec<String>, SchemaError> {
        Ok(vec![prefix.to_string()])
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Unset should be skipped by the field attribute; if it still
            // reaches a serializer, null is the least-wrong encoding.
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Value(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}
