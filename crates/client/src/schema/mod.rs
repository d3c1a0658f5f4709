//! Model schemas and field-path derivation.
//!
//! Responsibilities:
//! - Define the [`Model`] trait through which read models declare their fields.
//! - Define [`Field`] descriptors covering every supported field shape.
//! - Derive the flat, dot-separated field-path list a read model needs to
//!   request from the server (the `fields` query parameter).
//!
//! Does NOT handle:
//! - JSON encoding/decoding of model values (serde derives on the model).
//! - Request construction (see [`crate::client`]).
//!
//! Invariants:
//! - Derivation depends only on the declared schema, never on instance data.
//! - Paths come out in declaration order, outer fields before inner ones.
//! - Unsupported shapes are reported as [`SchemaError`] values, never panics.

pub mod optional;

use crate::error::SchemaError;

pub use optional::{Optional, OptionalValue, Presence};

/// Function producing the declared fields of a nested model.
pub type SchemaFn = fn() -> Vec<Field>;

/// Function producing the paths an optional wrapper contributes under a prefix.
pub type PathsFn = fn(&str) -> Result<Vec<String>, SchemaError>;

/// A type whose values can be fetched from a Directus collection.
///
/// Implementations list the fields the remote API should return, using the
/// *wire* names (after any serde renames). Fields that are never requested
/// are simply not declared.
///
/// # Example
///
/// ```
/// use directus_client::schema::{Field, Model};
///
/// struct Article {
///     id: i64,
///     title: String,
/// }
///
/// impl Model for Article {
///     fn fields() -> Vec<Field> {
///         vec![Field::scalar("id"), Field::scalar("title")]
///     }
/// }
/// ```
pub trait Model {
    /// Declared fields, in the order they should be requested.
    fn fields() -> Vec<Field>;
}

/// One declared field of a read model.
#[derive(Debug, Clone)]
pub struct Field {
    name: &'static str,
    kind: FieldKind,
}

/// The shape of a declared field, driving how paths are derived for it.
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// A plain leaf value (bool, number, string). Contributes its own path.
    Scalar,
    /// A datetime leaf. Contributes its own path with no descent.
    Time,
    /// A free-form key-value object, requested by bare name like a scalar.
    Map,
    /// A nested single-valued model. Paths recurse under this field's name.
    Nested(SchemaFn),
    /// A repeated field. Paths never reflect the repetition itself.
    Sequence(SequenceKind),
    /// An optional wrapper; the wrapper type reports its own contribution.
    Optional(PathsFn),
    /// A reference/indirection. Always rejected during derivation.
    Reference(&'static str),
}

/// Element shape of a [`FieldKind::Sequence`] field.
#[derive(Debug, Clone)]
pub enum SequenceKind {
    /// Unstructured elements; the sequence contributes a single path.
    Scalar,
    /// Model elements; paths recurse into the element schema.
    Nested(SchemaFn),
}

impl Field {
    /// A plain scalar leaf.
    pub fn scalar(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Scalar,
        }
    }

    /// A datetime leaf, typically declared for [`crate::datetime::Datetime`]
    /// fields. Treated as opaque: derivation never descends into it.
    pub fn time(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Time,
        }
    }

    /// A free-form key-value map, requested by its bare name.
    pub fn map(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Map,
        }
    }

    /// A nested single-valued model field.
    pub fn nested<M: Model>(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Nested(M::fields),
        }
    }

    /// A sequence of unstructured elements (strings, numbers, ...).
    pub fn sequence(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Sequence(SequenceKind::Scalar),
        }
    }

    /// A sequence of nested model elements.
    pub fn sequence_of<M: Model>(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Sequence(SequenceKind::Nested(M::fields)),
        }
    }

    /// An optional wrapper field. The wrapper type itself reports which
    /// paths it contributes for the field's position in the tree.
    pub fn optional<O: OptionalValue>(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Optional(O::field_paths),
        }
    }

    /// A reference/indirection field.
    ///
    /// Declaring one always fails derivation with
    /// [`SchemaError::UnsupportedReference`]; it exists so generated or
    /// mechanically translated schemas surface a descriptive configuration
    /// error instead of silently producing wrong paths. Use
    /// [`Field::optional`] for nullable values.
    pub fn reference(name: &'static str, ty: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Reference(ty),
        }
    }

    /// The wire name of this field.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared shape of this field.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }
}

/// Derive the ordered field-path list for a read model.
///
/// Produces one dot-separated path per requestable leaf (or per whole-value
/// field for time and map shapes), in declaration order.
pub fn field_paths<M: Model>() -> Result<Vec<String>, SchemaError> {
    paths_for_fields("", &M::fields())
}

fn paths_for_fields(prefix: &str, fields: &[Field]) -> Result<Vec<String>, SchemaError> {
    let mut paths = Vec::new();
    for field in fields {
        collect_field(prefix, field, &mut paths)?;
    }
    Ok(paths)
}

fn collect_field(prefix: &str, field: &Field, out: &mut Vec<String>) -> Result<(), SchemaError> {
    let path = join_path(prefix, field.name);
    match &field.kind {
        FieldKind::Scalar | FieldKind::Time | FieldKind::Map => out.push(path),
        FieldKind::Sequence(SequenceKind::Scalar) => out.push(path),
        FieldKind::Nested(schema) | FieldKind::Sequence(SequenceKind::Nested(schema)) => {
            out.extend(paths_for_fields(&path, &schema())?);
        }
        FieldKind::Optional(contribute) => out.extend(contribute(&path)?),
        FieldKind::Reference(ty) => {
            return Err(SchemaError::UnsupportedReference { field: path, ty });
        }
    }
    Ok(())
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
