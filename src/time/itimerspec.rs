use crate::{Field, Shape, TimeSpec, Tuple, TupleCodec};

/// Portable equivalent of struct itimerspec
///
/// Encodes as a pair of nested `timespec` tuples, interval first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntervalTimer {
    /// Period between expirations after the first; zero for a one-shot timer.
    pub interval: TimeSpec,
    /// Time until the first expiration; zero disarms the timer.
    pub value: TimeSpec,
}

impl TupleCodec for IntervalTimer {
    const SHAPE: Shape = Shape::ITimerSpec;

    fn decode(tuple: &Tuple) -> crate::Result<IntervalTimer> {
        tuple.expect_arity(Self::SHAPE)?;
        Ok(IntervalTimer {
            interval: TimeSpec::decode(tuple.tuple(Self::SHAPE, 0)?)?,
            value: TimeSpec::decode(tuple.tuple(Self::SHAPE, 1)?)?,
        })
    }

    fn encode(&self) -> Tuple {
        Tuple::new(vec![
            Field::Tuple(self.interval.encode()),
            Field::Tuple(self.value.encode()),
        ])
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
mod native {
    use super::IntervalTimer;
    use crate::{FromInner, IntoInner, Shape, TimeSpec, Tuple, TupleCodec};

    impl FromInner<libc::itimerspec> for IntervalTimer {
        fn from_inner(it: libc::itimerspec) -> IntervalTimer {
            IntervalTimer {
                interval: TimeSpec::from_inner(it.it_interval),
                value: TimeSpec::from_inner(it.it_value),
            }
        }
    }

    impl FromInner<IntervalTimer> for libc::itimerspec {
        fn from_inner(it: IntervalTimer) -> libc::itimerspec {
            libc::itimerspec {
                it_interval: libc::timespec::from_inner(it.interval),
                it_value: libc::timespec::from_inner(it.value),
            }
        }
    }

    impl TupleCodec for libc::itimerspec {
        const SHAPE: Shape = Shape::ITimerSpec;

        fn decode(tuple: &Tuple) -> crate::Result<libc::itimerspec> {
            IntervalTimer::decode(tuple).map(IntoInner::into_inner)
        }

        fn encode(&self) -> Tuple {
            IntervalTimer::from_inner(*self).encode()
        }
    }
}
