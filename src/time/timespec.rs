use crate::{Field, FromInner, IntoInner, Shape, Tuple, TupleCodec};

/// Portable equivalent of struct timespec
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TimeSpec {
    pub sec: i64,
    pub nsec: i64,
}

impl TupleCodec for TimeSpec {
    const SHAPE: Shape = Shape::TimeSpec;

    fn decode(tuple: &Tuple) -> crate::Result<TimeSpec> {
        tuple.expect_arity(Self::SHAPE)?;
        Ok(TimeSpec {
            sec: tuple.int64(Self::SHAPE, 0)?,
            nsec: tuple.int64(Self::SHAPE, 1)?,
        })
    }

    fn encode(&self) -> Tuple {
        Tuple::new(vec![Field::Int64(self.sec), Field::Int64(self.nsec)])
    }
}

#[cfg(unix)]
impl FromInner<libc::timespec> for TimeSpec {
    fn from_inner(ts: libc::timespec) -> TimeSpec {
        TimeSpec {
            sec: ts.tv_sec.into(),
            nsec: ts.tv_nsec.into(),
        }
    }
}

#[cfg(unix)]
impl FromInner<TimeSpec> for libc::timespec {
    fn from_inner(ts: TimeSpec) -> libc::timespec {
        let mut out: libc::timespec = unsafe { std::mem::zeroed() };
        out.tv_sec = ts.sec as _;
        out.tv_nsec = ts.nsec as _;
        out
    }
}

#[cfg(unix)]
impl TupleCodec for libc::timespec {
    const SHAPE: Shape = Shape::TimeSpec;

    fn decode(tuple: &Tuple) -> crate::Result<libc::timespec> {
        TimeSpec::decode(tuple).map(IntoInner::into_inner)
    }

    fn encode(&self) -> Tuple {
        TimeSpec::from_inner(*self).encode()
    }
}

#[cfg(feature = "uv")]
impl FromInner<uv::uv_timespec_t> for TimeSpec {
    fn from_inner(ts: uv::uv_timespec_t) -> TimeSpec {
        TimeSpec {
            sec: ts.tv_sec.into(),
            nsec: ts.tv_nsec.into(),
        }
    }
}

#[cfg(feature = "uv")]
impl FromInner<TimeSpec> for uv::uv_timespec_t {
    fn from_inner(ts: TimeSpec) -> uv::uv_timespec_t {
        uv::uv_timespec_t {
            tv_sec: ts.sec as _,
            tv_nsec: ts.nsec as _,
        }
    }
}

#[cfg(feature = "nix")]
impl FromInner<nix::sys::time::TimeSpec> for TimeSpec {
    fn from_inner(ts: nix::sys::time::TimeSpec) -> TimeSpec {
        let raw: &libc::timespec = ts.as_ref();
        TimeSpec::from_inner(*raw)
    }
}

#[cfg(feature = "nix")]
impl FromInner<TimeSpec> for nix::sys::time::TimeSpec {
    fn from_inner(ts: TimeSpec) -> nix::sys::time::TimeSpec {
        nix::sys::time::TimeSpec::from(libc::timespec::from_inner(ts))
    }
}
