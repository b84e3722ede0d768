#![cfg(unix)]

extern crate posix_time_codec;

use nix::time::{clock_gettime, ClockId};
use posix_time_codec::{BrokenDownTime, FromInner, IntoInner, TimeSpec, TimeVal, Tuple, TupleCodec};

#[test]
fn realtime_clock_round_trip() {
    let now = clock_gettime(ClockId::CLOCK_REALTIME).unwrap();
    let raw: libc::timespec = *now.as_ref();

    let tuple = raw.encode();
    assert_eq!(tuple, Tuple::from([raw.tv_sec as i64, raw.tv_nsec as i64]));

    let back = libc::timespec::decode(&tuple).unwrap();
    assert_eq!(back.tv_sec, raw.tv_sec);
    assert_eq!(back.tv_nsec, raw.tv_nsec);
}

#[test]
fn timespec_native_conversion() {
    let ts = TimeSpec {
        sec: 1_700_000_000,
        nsec: 123_456_789,
    };
    let raw: libc::timespec = ts.into_inner();
    assert_eq!(raw.tv_sec as i64, ts.sec);
    assert_eq!(raw.tv_nsec as i64, ts.nsec);
    assert_eq!(TimeSpec::from_inner(raw), ts);
}

#[test]
fn timeval_native_round_trip() {
    let mut raw: libc::timeval = unsafe { std::mem::zeroed() };
    raw.tv_sec = 86_400;
    raw.tv_usec = 250_000;

    let tuple = raw.encode();
    assert_eq!(TimeVal::decode(&tuple).unwrap(), TimeVal::from_inner(raw));

    let back = libc::timeval::decode(&tuple).unwrap();
    assert_eq!(back.tv_sec, raw.tv_sec);
    assert_eq!(back.tv_usec, raw.tv_usec);
}

#[test]
fn gmtime_round_trip() {
    let t: libc::time_t = 1_700_000_000;
    let mut raw: libc::tm = unsafe { std::mem::zeroed() };
    assert!(!unsafe { libc::gmtime_r(&t, &mut raw) }.is_null());

    let tm = BrokenDownTime::from_inner(raw);
    assert_eq!(
        tm,
        BrokenDownTime {
            sec: 20,
            min: 13,
            hour: 22,
            mday: 14,
            mon: 10,
            year: 123,
            wday: 2,
            yday: 317,
            isdst: 0,
        }
    );

    let back = libc::tm::decode(&raw.encode()).unwrap();
    assert_eq!(BrokenDownTime::from_inner(back), tm);

    // the calendar fields alone are enough for timegm to recover the instant
    let mut back = back;
    assert_eq!(unsafe { libc::timegm(&mut back) }, t);
}

#[test]
fn tm_extensions_are_zeroed() {
    let raw: libc::tm = BrokenDownTime {
        year: 70,
        mday: 1,
        ..BrokenDownTime::default()
    }
    .into_inner();
    assert_eq!(raw.tm_year, 70);
    assert_eq!(raw.tm_mday, 1);
    #[cfg(any(target_os = "linux", target_os = "android", target_vendor = "apple"))]
    {
        assert_eq!(raw.tm_gmtoff, 0);
        assert!(raw.tm_zone.is_null());
    }
}

#[cfg(all(has_itimerspec, any(target_os = "linux", target_os = "android")))]
#[test]
fn itimerspec_native_round_trip() {
    use posix_time_codec::IntervalTimer;

    let it = IntervalTimer {
        interval: TimeSpec { sec: 1, nsec: 0 },
        value: TimeSpec {
            sec: 0,
            nsec: 500_000_000,
        },
    };
    let raw: libc::itimerspec = it.into_inner();
    assert_eq!(raw.it_interval.tv_sec, 1);
    assert_eq!(raw.it_interval.tv_nsec, 0);
    assert_eq!(raw.it_value.tv_sec, 0);
    assert_eq!(raw.it_value.tv_nsec, 500_000_000);

    let back = libc::itimerspec::decode(&raw.encode()).unwrap();
    assert_eq!(IntervalTimer::from_inner(back), it);
}

#[cfg(feature = "nix")]
#[test]
fn nix_records() {
    let now = clock_gettime(ClockId::CLOCK_MONOTONIC).unwrap();
    let ts = TimeSpec::from_inner(now);
    assert_eq!(ts.sec, now.tv_sec() as i64);
    assert_eq!(ts.nsec, now.tv_nsec() as i64);
    let back: nix::sys::time::TimeSpec = ts.into_inner();
    assert_eq!(back, now);

    let tv = TimeVal { sec: 3, usec: 4 };
    let ntv: nix::sys::time::TimeVal = tv.into_inner();
    assert_eq!(ntv.tv_sec(), 3);
    assert_eq!(ntv.tv_usec(), 4);
    assert_eq!(TimeVal::from_inner(ntv), tv);
}

#[cfg(feature = "uv")]
#[test]
fn libuv_records() {
    use libuv_sys2::{uv_timespec_t, uv_timeval64_t, uv_timeval_t};

    let raw = uv_timespec_t {
        tv_sec: 1_700_000_000,
        tv_nsec: 999_999_999,
    };
    let ts = TimeSpec::from_inner(raw);
    assert_eq!(
        ts,
        TimeSpec {
            sec: 1_700_000_000,
            nsec: 999_999_999
        }
    );
    let back: uv_timespec_t = TimeSpec::decode(&ts.encode()).unwrap().into_inner();
    assert_eq!(back.tv_sec, raw.tv_sec);
    assert_eq!(back.tv_nsec, raw.tv_nsec);

    let raw = uv_timeval_t {
        tv_sec: -1,
        tv_usec: 999_999,
    };
    let tv = TimeVal::from_inner(raw);
    assert_eq!(tv, TimeVal { sec: -1, usec: 999_999 });
    let back: uv_timeval_t = TimeVal::decode(&tv.encode()).unwrap().into_inner();
    assert_eq!(back.tv_sec, raw.tv_sec);
    assert_eq!(back.tv_usec, raw.tv_usec);

    // 64-bit seconds with int32_t microseconds: both extremes survive the tuple
    for &(sec, usec) in &[(i64::MAX, i32::MAX), (i64::MIN, i32::MIN), (i64::MAX, 0)] {
        let raw = uv_timeval64_t {
            tv_sec: sec,
            tv_usec: usec,
        };
        let tuple = TimeVal::from_inner(raw).encode();
        assert_eq!(tuple, Tuple::from([sec, i64::from(usec)]));
        let back: uv_timeval64_t = TimeVal::decode(&tuple).unwrap().into_inner();
        assert_eq!(back.tv_sec, sec);
        assert_eq!(back.tv_usec, usec);
    }
}
