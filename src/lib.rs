//! Bit-exact conversion of POSIX time records to and from flat integer tuples.
//!
//! Four record shapes are supported: `timespec`, `timeval`, `tm` and, where the target has
//! interval timers, `itimerspec`. Each has a fixed tuple layout:
//!
//! | shape        | tuple                                                        |
//! |--------------|--------------------------------------------------------------|
//! | `timespec`   | `[int64 sec, int64 nsec]`                                    |
//! | `timeval`    | `[int64 sec, int64 usec]`                                    |
//! | `tm`         | `[int sec, min, hour, mday, mon, year, wday, yday, isdst]`   |
//! | `itimerspec` | `[timespec interval, timespec value]`                        |
//!
//! ```
//! use posix_time_codec::{Tuple, TimeSpec, TupleCodec};
//!
//! let tuple = Tuple::from([1_700_000_000i64, 123_456_789]);
//! let ts = TimeSpec::decode(&tuple).unwrap();
//! assert_eq!(ts, TimeSpec { sec: 1_700_000_000, nsec: 123_456_789 });
//! assert_eq!(ts.encode(), tuple);
//! ```

#[cfg(feature = "uv")]
extern crate libuv_sys2 as uv;

pub mod error;
pub use error::*;

pub mod inner;
pub use inner::*;

pub mod shape;
pub use shape::*;

pub mod tuple;
pub use tuple::*;

pub mod codec;
pub use codec::TupleCodec;

pub mod time;
pub use time::*;

pub mod wire;

pub type Result<T> = std::result::Result<T, error::Error>;
