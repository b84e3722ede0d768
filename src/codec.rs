//! The tuple codec.
//!
//! Every record shape gets a pair of pure functions: `decode` reads the fixed-position fields
//! of a tuple into a record and `encode` allocates a fresh tuple holding the record's fields.
//! Neither direction rounds or clamps; a decoded record holds exactly the integers the tuple
//! held, and vice versa.

use crate::{wire, Shape, Tuple};

/// A record with a fixed tuple layout.
pub trait TupleCodec: Sized {
    /// The layout this record is encoded with.
    const SHAPE: Shape;

    /// Read a record out of `tuple`.
    ///
    /// Fails if the tuple does not have the arity and field kinds of `Self::SHAPE`. Field
    /// values themselves are not range checked.
    fn decode(tuple: &Tuple) -> crate::Result<Self>;

    /// Allocate a new tuple holding this record's fields.
    fn encode(&self) -> Tuple;

    /// Encode into a wire buffer.
    fn to_wire(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(wire::size_of(Self::SHAPE));
        wire::write_fields(&self.encode(), &mut buf);
        buf
    }

    /// Decode from a wire buffer, which must be exactly `wire::size_of(Self::SHAPE)` bytes.
    fn from_wire(bytes: &[u8]) -> crate::Result<Self> {
        Self::decode(&wire::read(Self::SHAPE, bytes)?)
    }
}

/// Decode a record of type `T` from `tuple`.
pub fn decode<T: TupleCodec>(tuple: &Tuple) -> crate::Result<T> {
    T::decode(tuple)
}

/// Encode `record` into a new tuple.
pub fn encode<T: TupleCodec>(record: &T) -> Tuple {
    record.encode()
}

/// Shorthand for decoding a `timespec` tuple.
pub fn timespec_of_tuple(tuple: &Tuple) -> crate::Result<crate::TimeSpec> {
    crate::TimeSpec::decode(tuple)
}

/// Shorthand for decoding a `timeval` tuple.
pub fn timeval_of_tuple(tuple: &Tuple) -> crate::Result<crate::TimeVal> {
    crate::TimeVal::decode(tuple)
}
