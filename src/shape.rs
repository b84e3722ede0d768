use bitflags::bitflags;

/// The record shapes this build can convert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `struct timespec`: seconds, nanoseconds.
    TimeSpec,
    /// `struct timeval`: seconds, microseconds.
    TimeVal,
    /// `struct tm`: the nine broken-down calendar fields.
    Tm,
    /// `struct itimerspec`: interval and value, each a nested `timespec` tuple.
    #[cfg(has_itimerspec)]
    ITimerSpec,
}

impl Shape {
    /// Number of top-level fields in a tuple of this shape.
    pub const fn arity(self) -> usize {
        match self {
            Shape::TimeSpec | Shape::TimeVal => 2,
            Shape::Tm => 9,
            #[cfg(has_itimerspec)]
            Shape::ITimerSpec => 2,
        }
    }

    /// The C name of the record.
    pub const fn name(self) -> &'static str {
        match self {
            Shape::TimeSpec => "timespec",
            Shape::TimeVal => "timeval",
            Shape::Tm => "tm",
            #[cfg(has_itimerspec)]
            Shape::ITimerSpec => "itimerspec",
        }
    }

    /// Every shape compiled into this build.
    pub fn all() -> &'static [Shape] {
        &[
            Shape::TimeSpec,
            Shape::TimeVal,
            Shape::Tm,
            #[cfg(has_itimerspec)]
            Shape::ITimerSpec,
        ]
    }

    /// The capability bit for this shape.
    pub fn flag(self) -> Shapes {
        match self {
            Shape::TimeSpec => Shapes::TIMESPEC,
            Shape::TimeVal => Shapes::TIMEVAL,
            Shape::Tm => Shapes::TM,
            #[cfg(has_itimerspec)]
            Shape::ITimerSpec => Shapes::ITIMERSPEC,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of shape capabilities.
    pub struct Shapes: u32 {
        const TIMESPEC = 1 << 0;
        const TIMEVAL = 1 << 1;
        const TM = 1 << 2;
        const ITIMERSPEC = 1 << 3;
    }
}

impl Shapes {
    /// The shapes supported by the target this crate was built for.
    ///
    /// `ITIMERSPEC` is only present where the target defines interval timers; the check is
    /// resolved when the crate is built, not at runtime.
    pub fn supported() -> Shapes {
        Shape::all()
            .iter()
            .fold(Shapes::empty(), |acc, shape| acc | shape.flag())
    }
}
