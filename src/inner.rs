//! Conversions between the portable records and native records

/// A lossless conversion from a native or portable record. Like `From<T>`, but implementable
/// for pairs of foreign types such as the `libc` and libuv time structs.
pub trait FromInner<T>: Sized {
    fn from_inner(_: T) -> Self;
}

/// The counterpart of `FromInner`, like `Into<T>`.
pub trait IntoInner<T>: Sized {
    fn into_inner(self) -> T;
}

// FromInner implies IntoInner
impl<T, U> IntoInner<U> for T
where
    U: FromInner<T>,
{
    fn into_inner(self) -> U {
        U::from_inner(self)
    }
}

// FromInner (and thus IntoInner) is reflexive
impl<T> FromInner<T> for T {
    fn from_inner(t: T) -> T {
        t
    }
}
