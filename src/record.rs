//! Schema-driven decoding of fixed-layout binary records.
//!
//! A [`Schema`] names the contiguous fields of a fixed-size structure; a
//! [`Record`] pairs a schema with a byte view of exactly that size and
//! decodes fields on demand. Integer fields are little-endian and signed,
//! sign-extended to `i64` regardless of width. Byte fields come back as
//! sub-views borrowing the record's storage, so nothing is copied.

use crate::error::{Error, Result};
use crate::view::ByteView;

/// Width of a little-endian integer field, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    W1,
    W2,
    W4,
    W8,
}

impl IntWidth {
    /// Number of bytes the integer occupies.
    pub fn bytes(self) -> usize {
        match self {
            IntWidth::W1 => 1,
            IntWidth::W2 => 2,
            IntWidth::W4 => 4,
            IntWidth::W8 => 8,
        }
    }
}

/// How a field's bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Uninterpreted bytes of the given length.
    Bytes(usize),
    /// A signed little-endian integer of the given width.
    Int(IntWidth),
}

impl FieldKind {
    fn width(self) -> usize {
        match self {
            FieldKind::Bytes(len) => len,
            FieldKind::Int(width) => width.bytes(),
        }
    }
}

/// A decoded field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Raw bytes, borrowing the record's storage.
    Bytes(ByteView<'a>),
    /// A sign-extended integer.
    Int(i64),
}

#[derive(Debug, Clone)]
struct FieldSpec {
    name: &'static str,
    offset: usize,
    kind: FieldKind,
}

/// An ordered description of the named fields in a fixed-size structure.
///
/// Field offsets are assigned by accumulation in declaration order; the
/// schema's total width is the sum of all field widths.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    total_width: usize,
}

impl Schema {
    /// Build a schema from `(name, kind)` pairs in layout order.
    ///
    /// Fails with [`Error::DuplicateField`] when two fields share a name.
    pub fn new(fields: &[(&'static str, FieldKind)]) -> Result<Self> {
        let mut specs: Vec<FieldSpec> = Vec::with_capacity(fields.len());
        let mut offset = 0usize;
        for &(name, kind) in fields {
            if specs.iter().any(|spec| spec.name == name) {
                return Err(Error::DuplicateField(name));
            }
            specs.push(FieldSpec { name, offset, kind });
            offset += kind.width();
        }
        Ok(Self {
            fields: specs,
            total_width: offset,
        })
    }

    /// Total number of bytes the schema describes.
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    fn field(&self, name: &str) -> Result<&FieldSpec> {
        self.fields
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }
}

/// Concatenate two field lists into one, head fields first.
///
/// Used to lay out structures that begin with a common prefix without
/// repeating the prefix fields at each use site.
pub fn concat_fields(
    head: &[(&'static str, FieldKind)],
    tail: &[(&'static str, FieldKind)],
) -> Vec<(&'static str, FieldKind)> {
    let mut fields = Vec::with_capacity(head.len() + tail.len());
    fields.extend_from_slice(head);
    fields.extend_from_slice(tail);
    fields
}

/// A byte view bound to a schema, decoding fields on demand.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a, 's> {
    view: ByteView<'a>,
    schema: &'s Schema,
}

impl<'a, 's> Record<'a, 's> {
    /// Bind `view` to `schema`.
    ///
    /// The view must be exactly as long as the schema's total width;
    /// anything else is a [`Error::SchemaMismatch`].
    pub fn new(view: ByteView<'a>, schema: &'s Schema) -> Result<Self> {
        if view.len() != schema.total_width() {
            return Err(Error::SchemaMismatch {
                expected: schema.total_width(),
                actual: view.len(),
            });
        }
        Ok(Self { view, schema })
    }

    /// Decode the named field.
    pub fn get(&self, name: &str) -> Result<FieldValue<'a>> {
        let spec = self.schema.field(name)?;
        let data = self.view.slice(spec.offset, spec.kind.width())?;
        Ok(match spec.kind {
            FieldKind::Bytes(_) => FieldValue::Bytes(data),
            FieldKind::Int(width) => FieldValue::Int(decode_int(data.as_bytes(), width)),
        })
    }

    /// Decode the named field as an integer.
    pub fn int(&self, name: &str) -> Result<i64> {
        match self.get(name)? {
            FieldValue::Int(value) => Ok(value),
            FieldValue::Bytes(_) => Err(Error::FieldKindMismatch {
                name: name.to_string(),
                requested: "an integer",
            }),
        }
    }

    /// Decode the named field as raw bytes.
    pub fn bytes(&self, name: &str) -> Result<ByteView<'a>> {
        match self.get(name)? {
            FieldValue::Bytes(view) => Ok(view),
            FieldValue::Int(_) => Err(Error::FieldKindMismatch {
                name: name.to_string(),
                requested: "raw bytes",
            }),
        }
    }
}

// The caller guarantees `bytes.len() == width.bytes()`; records slice the
// exact field range before decoding.
fn decode_int(bytes: &[u8], width: IntWidth) -> i64 {
    match width {
        IntWidth::W1 => i8::from_le_bytes([bytes[0]]) as i64,
        IntWidth::W2 => i16::from_le_bytes([bytes[0], bytes[1]]) as i64,
        IntWidth::W4 => i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as i64,
        IntWidth::W8 => i64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]),
    }
}
