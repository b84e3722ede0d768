//! Fixed-layout byte rendition of a tuple.
//!
//! Fields are laid out back to back in tuple order with no padding and in native byte order:
//! an `int64` field takes 8 bytes, an `int` field `size_of::<c_int>()` bytes, and a nested
//! tuple is laid out inline. The buffer carries no field tags, so reading one back needs the
//! shape it was written from.

use crate::{Error, Field, FieldKind, Shape, Tuple};
use std::os::raw::c_int;

const INT_SIZE: usize = std::mem::size_of::<c_int>();
const INT64_SIZE: usize = std::mem::size_of::<i64>();

/// Where each field of a shape lives.
#[derive(Clone, Copy)]
enum Slot {
    Int,
    Int64,
    #[cfg_attr(not(has_itimerspec), allow(dead_code))]
    Nested(Shape),
}

impl Slot {
    fn kind(self) -> FieldKind {
        match self {
            Slot::Int => FieldKind::Int,
            Slot::Int64 => FieldKind::Int64,
            Slot::Nested(_) => FieldKind::Tuple,
        }
    }
}

fn slots(shape: Shape) -> &'static [Slot] {
    match shape {
        Shape::TimeSpec | Shape::TimeVal => &[Slot::Int64, Slot::Int64],
        Shape::Tm => &[Slot::Int; 9],
        #[cfg(has_itimerspec)]
        Shape::ITimerSpec => &[Slot::Nested(Shape::TimeSpec), Slot::Nested(Shape::TimeSpec)],
    }
}

/// Size in bytes of the wire buffer for `shape`.
pub fn size_of(shape: Shape) -> usize {
    slots(shape)
        .iter()
        .map(|slot| match *slot {
            Slot::Int => INT_SIZE,
            Slot::Int64 => INT64_SIZE,
            Slot::Nested(inner) => size_of(inner),
        })
        .sum()
}

/// Append the wire rendition of `tuple` to `buf`.
///
/// The buffer carries no field tags, so `tuple` is checked against the layout of `shape`
/// first: a tuple that only happens to have the right byte length would otherwise read back
/// as a different tuple. Nothing is appended on error.
pub fn write(shape: Shape, tuple: &Tuple, buf: &mut Vec<u8>) -> crate::Result<()> {
    check(shape, tuple)?;
    write_fields(tuple, buf);
    Ok(())
}

fn check(shape: Shape, tuple: &Tuple) -> crate::Result<()> {
    tuple.expect_arity(shape)?;
    for (index, (slot, field)) in slots(shape).iter().zip(tuple).enumerate() {
        match (*slot, field) {
            (Slot::Int, Field::Int(_)) | (Slot::Int64, Field::Int64(_)) => {}
            (Slot::Nested(inner), Field::Tuple(t)) => check(inner, t)?,
            (slot, field) => {
                return Err(Error::field(shape, index, slot.kind(), field.kind()));
            }
        }
    }
    Ok(())
}

// Callers guarantee `tuple` matches its shape.
pub(crate) fn write_fields(tuple: &Tuple, buf: &mut Vec<u8>) {
    for field in tuple {
        match field {
            Field::Int(v) => buf.extend_from_slice(&v.to_ne_bytes()),
            Field::Int64(v) => buf.extend_from_slice(&v.to_ne_bytes()),
            Field::Tuple(t) => write_fields(t, buf),
        }
    }
}

/// Parse a wire buffer of `shape` back into a tuple.
///
/// `bytes` must be exactly `size_of(shape)` long.
pub fn read(shape: Shape, bytes: &[u8]) -> crate::Result<Tuple> {
    if bytes.len() != size_of(shape) {
        return Err(Error::wire_length(shape, bytes.len()));
    }
    let mut pos = 0;
    Ok(read_at(shape, bytes, &mut pos))
}

// Length has been checked against the whole layout, so the slices below are in bounds.
fn read_at(shape: Shape, bytes: &[u8], pos: &mut usize) -> Tuple {
    slots(shape)
        .iter()
        .map(|slot| match *slot {
            Slot::Int => {
                let v = c_int::from_ne_bytes(take(bytes, pos));
                Field::Int(v)
            }
            Slot::Int64 => {
                let v = i64::from_ne_bytes(take(bytes, pos));
                Field::Int64(v)
            }
            Slot::Nested(inner) => Field::Tuple(read_at(inner, bytes, pos)),
        })
        .collect()
}

fn take<const N: usize>(bytes: &[u8], pos: &mut usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[*pos..*pos + N]);
    *pos += N;
    out
}
