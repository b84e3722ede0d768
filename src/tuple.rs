//! The opaque ordered tuple exchanged across the foreign-function boundary.

use crate::{Error, Shape};
use std::os::raw::c_int;

/// The kind of value a tuple field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A native `int`.
    Int,
    /// A 64-bit signed integer.
    Int64,
    /// A nested tuple.
    Tuple,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FieldKind::Int => "int",
            FieldKind::Int64 => "int64",
            FieldKind::Tuple => "tuple",
        })
    }
}

/// A single field of a tuple.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Int(c_int),
    Int64(i64),
    Tuple(Tuple),
}

impl Field {
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Int(_) => FieldKind::Int,
            Field::Int64(_) => FieldKind::Int64,
            Field::Tuple(_) => FieldKind::Tuple,
        }
    }
}

impl From<c_int> for Field {
    fn from(v: c_int) -> Field {
        Field::Int(v)
    }
}

impl From<i64> for Field {
    fn from(v: i64) -> Field {
        Field::Int64(v)
    }
}

impl From<Tuple> for Field {
    fn from(t: Tuple) -> Field {
        Field::Tuple(t)
    }
}

/// A fixed-arity ordered tuple of fields.
///
/// A tuple has no shape of its own: the same two `int64` fields read as a `timespec` or a
/// `timeval` depending on which codec decodes them. Tuples are plain owned values and share
/// nothing with the allocator of whichever runtime produced or consumes them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tuple {
    fields: Box<[Field]>,
}

impl Tuple {
    /// Create a tuple from its fields, in order.
    pub fn new(fields: Vec<Field>) -> Tuple {
        Tuple {
            fields: fields.into_boxed_slice(),
        }
    }

    /// Number of fields in the tuple.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Field at position `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Check that the tuple has exactly the arity of `shape`.
    pub(crate) fn expect_arity(&self, shape: Shape) -> crate::Result<()> {
        if self.arity() == shape.arity() {
            Ok(())
        } else {
            Err(Error::arity(shape, self.arity()))
        }
    }

    pub(crate) fn int(&self, shape: Shape, index: usize) -> crate::Result<c_int> {
        match &self.fields[index] {
            Field::Int(v) => Ok(*v),
            other => Err(Error::field(shape, index, FieldKind::Int, other.kind())),
        }
    }

    pub(crate) fn int64(&self, shape: Shape, index: usize) -> crate::Result<i64> {
        match &self.fields[index] {
            Field::Int64(v) => Ok(*v),
            other => Err(Error::field(shape, index, FieldKind::Int64, other.kind())),
        }
    }

    #[cfg_attr(not(has_itimerspec), allow(dead_code))]
    pub(crate) fn tuple(&self, shape: Shape, index: usize) -> crate::Result<&Tuple> {
        match &self.fields[index] {
            Field::Tuple(t) => Ok(t),
            other => Err(Error::field(shape, index, FieldKind::Tuple, other.kind())),
        }
    }
}

impl std::ops::Index<usize> for Tuple {
    type Output = Field;

    fn index(&self, index: usize) -> &Field {
        &self.fields[index]
    }
}

impl std::iter::FromIterator<Field> for Tuple {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Tuple {
        Tuple::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Tuple {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

macro_rules! tuple_from_array {
    ($($n:literal)*) => {
        $(
            impl From<[i64; $n]> for Tuple {
                fn from(values: [i64; $n]) -> Tuple {
                    values.iter().copied().map(Field::Int64).collect()
                }
            }

            impl From<[c_int; $n]> for Tuple {
                fn from(values: [c_int; $n]) -> Tuple {
                    values.iter().copied().map(Field::Int).collect()
                }
            }
        )*
    };
}

tuple_from_array! { 1 2 3 4 5 6 7 8 9 }
