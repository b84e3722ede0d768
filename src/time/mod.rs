//! Portable POSIX time records.
//!
//! Each record has the exact field widths of its tuple layout and converts losslessly to and
//! from the native records of the platform (`libc`, and optionally libuv and nix).

pub mod timespec;
pub use timespec::*;

pub mod timeval;
pub use timeval::*;

pub mod tm;
pub use tm::*;

#[cfg(has_itimerspec)]
pub mod itimerspec;
#[cfg(has_itimerspec)]
pub use itimerspec::*;
