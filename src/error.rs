use crate::{FieldKind, Shape};

/// A tuple or wire buffer that does not satisfy the layout contract of its shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The tuple does not have the number of fields the shape requires.
    ArityMismatch {
        shape: Shape,
        expected: usize,
        found: usize,
    },

    /// The field at `index` is not of the kind the shape requires at that position.
    FieldMismatch {
        shape: Shape,
        index: usize,
        expected: FieldKind,
        found: FieldKind,
    },

    /// A wire buffer is not exactly the size of the shape's layout.
    WireLength {
        shape: Shape,
        expected: usize,
        found: usize,
    },
}

impl Error {
    /// The shape whose contract was violated.
    pub fn shape(&self) -> Shape {
        match *self {
            Error::ArityMismatch { shape, .. }
            | Error::FieldMismatch { shape, .. }
            | Error::WireLength { shape, .. } => shape,
        }
    }

    pub(crate) fn arity(shape: Shape, found: usize) -> Error {
        let err = Error::ArityMismatch {
            shape,
            expected: shape.arity(),
            found,
        };
        log::debug!("contract violation: {}", err);
        err
    }

    pub(crate) fn field(shape: Shape, index: usize, expected: FieldKind, found: FieldKind) -> Error {
        let err = Error::FieldMismatch {
            shape,
            index,
            expected,
            found,
        };
        log::debug!("contract violation: {}", err);
        err
    }

    pub(crate) fn wire_length(shape: Shape, found: usize) -> Error {
        let err = Error::WireLength {
            shape,
            expected: crate::wire::size_of(shape),
            found,
        };
        log::debug!("contract violation: {}", err);
        err
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ArityMismatch {
                shape,
                expected,
                found,
            } => write!(
                f,
                "{} tuple must have {} fields, found {}",
                shape, expected, found
            ),
            Error::FieldMismatch {
                shape,
                index,
                expected,
                found,
            } => write!(
                f,
                "{} tuple field {} must be {}, found {}",
                shape, index, expected, found
            ),
            Error::WireLength {
                shape,
                expected,
                found,
            } => write!(
                f,
                "{} wire buffer must be {} bytes, found {}",
                shape, expected, found
            ),
        }
    }
}

impl std::error::Error for Error {}
