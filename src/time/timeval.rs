use crate::{Field, FromInner, IntoInner, Shape, Tuple, TupleCodec};

/// Portable equivalent of struct timeval
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TimeVal {
    pub sec: i64,
    pub usec: i64,
}

impl TupleCodec for TimeVal {
    const SHAPE: Shape = Shape::TimeVal;

    fn decode(tuple: &Tuple) -> crate::Result<TimeVal> {
        tuple.expect_arity(Self::SHAPE)?;
        Ok(TimeVal {
            sec: tuple.int64(Self::SHAPE, 0)?,
            usec: tuple.int64(Self::SHAPE, 1)?,
        })
    }

    fn encode(&self) -> Tuple {
        Tuple::new(vec![Field::Int64(self.sec), Field::Int64(self.usec)])
    }
}

#[cfg(unix)]
impl FromInner<libc::timeval> for TimeVal {
    fn from_inner(tv: libc::timeval) -> TimeVal {
        TimeVal {
            sec: tv.tv_sec.into(),
            usec: tv.tv_usec.into(),
        }
    }
}

#[cfg(unix)]
impl FromInner<TimeVal> for libc::timeval {
    fn from_inner(tv: TimeVal) -> libc::timeval {
        let mut out: libc::timeval = unsafe { std::mem::zeroed() };
        out.tv_sec = tv.sec as _;
        out.tv_usec = tv.usec as _;
        out
    }
}

#[cfg(unix)]
impl TupleCodec for libc::timeval {
    const SHAPE: Shape = Shape::TimeVal;

    fn decode(tuple: &Tuple) -> crate::Result<libc::timeval> {
        TimeVal::decode(tuple).map(IntoInner::into_inner)
    }

    fn encode(&self) -> Tuple {
        TimeVal::from_inner(*self).encode()
    }
}

#[cfg(feature = "uv")]
impl FromInner<uv::uv_timeval_t> for TimeVal {
    fn from_inner(tv: uv::uv_timeval_t) -> TimeVal {
        TimeVal {
            sec: tv.tv_sec.into(),
            usec: tv.tv_usec.into(),
        }
    }
}

#[cfg(feature = "uv")]
impl FromInner<TimeVal> for uv::uv_timeval_t {
    fn from_inner(tv: TimeVal) -> uv::uv_timeval_t {
        uv::uv_timeval_t {
            tv_sec: tv.sec as _,
            tv_usec: tv.usec as _,
        }
    }
}

// uv_gettimeofday fills the 64-bit variant, whose microseconds are an int32_t.
#[cfg(feature = "uv")]
impl FromInner<uv::uv_timeval64_t> for TimeVal {
    fn from_inner(tv: uv::uv_timeval64_t) -> TimeVal {
        TimeVal {
            sec: tv.tv_sec,
            usec: tv.tv_usec.into(),
        }
    }
}

#[cfg(feature = "uv")]
impl FromInner<TimeVal> for uv::uv_timeval64_t {
    fn from_inner(tv: TimeVal) -> uv::uv_timeval64_t {
        uv::uv_timeval64_t {
            tv_sec: tv.sec,
            tv_usec: tv.usec as _,
        }
    }
}

#[cfg(feature = "nix")]
impl FromInner<nix::sys::time::TimeVal> for TimeVal {
    fn from_inner(tv: nix::sys::time::TimeVal) -> TimeVal {
        let raw: &libc::timeval = tv.as_ref();
        TimeVal::from_inner(*raw)
    }
}

#[cfg(feature = "nix")]
impl FromInner<TimeVal> for nix::sys::time::TimeVal {
    fn from_inner(tv: TimeVal) -> nix::sys::time::TimeVal {
        nix::sys::time::TimeVal::from(libc::timeval::from_inner(tv))
    }
}
