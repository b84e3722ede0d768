use crate::{Field, FromInner, IntoInner, Shape, Tuple, TupleCodec};
use std::os::raw::c_int;

/// Portable equivalent of struct tm.
///
/// Only the nine POSIX calendar fields are carried. Platform extensions such as `tm_gmtoff`
/// and `tm_zone` are dropped when converting from `libc::tm` and zeroed when converting back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BrokenDownTime {
    /// Seconds after the minute, 0-60.
    pub sec: c_int,
    /// Minutes after the hour, 0-59.
    pub min: c_int,
    /// Hours since midnight, 0-23.
    pub hour: c_int,
    /// Day of the month, 1-31.
    pub mday: c_int,
    /// Months since January, 0-11.
    pub mon: c_int,
    /// Years since 1900.
    pub year: c_int,
    /// Days since Sunday, 0-6.
    pub wday: c_int,
    /// Days since January 1, 0-365.
    pub yday: c_int,
    /// Daylight saving flag: positive if in effect, zero if not, negative if unknown.
    pub isdst: c_int,
}

impl TupleCodec for BrokenDownTime {
    const SHAPE: Shape = Shape::Tm;

    fn decode(tuple: &Tuple) -> crate::Result<BrokenDownTime> {
        tuple.expect_arity(Self::SHAPE)?;
        let field = |index| tuple.int(Self::SHAPE, index);
        Ok(BrokenDownTime {
            sec: field(0)?,
            min: field(1)?,
            hour: field(2)?,
            mday: field(3)?,
            mon: field(4)?,
            year: field(5)?,
            wday: field(6)?,
            yday: field(7)?,
            isdst: field(8)?,
        })
    }

    fn encode(&self) -> Tuple {
        Tuple::new(vec![
            Field::Int(self.sec),
            Field::Int(self.min),
            Field::Int(self.hour),
            Field::Int(self.mday),
            Field::Int(self.mon),
            Field::Int(self.year),
            Field::Int(self.wday),
            Field::Int(self.yday),
            Field::Int(self.isdst),
        ])
    }
}

#[cfg(unix)]
impl FromInner<libc::tm> for BrokenDownTime {
    fn from_inner(tm: libc::tm) -> BrokenDownTime {
        BrokenDownTime {
            sec: tm.tm_sec,
            min: tm.tm_min,
            hour: tm.tm_hour,
            mday: tm.tm_mday,
            mon: tm.tm_mon,
            year: tm.tm_year,
            wday: tm.tm_wday,
            yday: tm.tm_yday,
            isdst: tm.tm_isdst,
        }
    }
}

#[cfg(unix)]
impl FromInner<BrokenDownTime> for libc::tm {
    fn from_inner(t: BrokenDownTime) -> libc::tm {
        // tm_zone is a pointer on most targets; null is its "no zone" value
        let mut tm: libc::tm = unsafe { std::mem::zeroed() };
        tm.tm_sec = t.sec;
        tm.tm_min = t.min;
        tm.tm_hour = t.hour;
        tm.tm_mday = t.mday;
        tm.tm_mon = t.mon;
        tm.tm_year = t.year;
        tm.tm_wday = t.wday;
        tm.tm_yday = t.yday;
        tm.tm_isdst = t.isdst;
        tm
    }
}

#[cfg(unix)]
impl TupleCodec for libc::tm {
    const SHAPE: Shape = Shape::Tm;

    fn decode(tuple: &Tuple) -> crate::Result<libc::tm> {
        BrokenDownTime::decode(tuple).map(IntoInner::into_inner)
    }

    fn encode(&self) -> Tuple {
        BrokenDownTime::from_inner(*self).encode()
    }
}
