extern crate posix_time_codec;

use posix_time_codec::{BrokenDownTime, Error, Field, FieldKind, Shape, Tuple, TupleCodec};
use rand::Rng;
use std::os::raw::c_int;

fn sample() -> BrokenDownTime {
    // 2023-11-14 22:13:20 UTC, a Tuesday
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
}

#[test]
fn encode_order() {
    let tuple = sample().encode();
    assert_eq!(
        tuple,
        Tuple::from([20 as c_int, 13, 22, 14, 10, 123, 2, 317, 0])
    );
    assert!(tuple.iter().all(|f| f.kind() == FieldKind::Int));
}

#[test]
fn round_trip() {
    let tm = sample();
    assert_eq!(BrokenDownTime::decode(&tm.encode()).unwrap(), tm);
}

#[test]
fn every_field_position() {
    // each position decodes into exactly one field
    for index in 0..9 {
        let mut values = [0 as c_int; 9];
        values[index] = 1;
        let tm = BrokenDownTime::decode(&Tuple::from(values)).unwrap();
        let decoded = [
            tm.sec, tm.min, tm.hour, tm.mday, tm.mon, tm.year, tm.wday, tm.yday, tm.isdst,
        ];
        assert_eq!(decoded, values);
    }
}

#[test]
fn swapping_two_fields() {
    let original = sample();
    let mut fields: Vec<Field> = original.encode().into_iter().collect();
    fields.swap(1, 2);
    let swapped = BrokenDownTime::decode(&Tuple::new(fields)).unwrap();
    assert_eq!(swapped.min, original.hour);
    assert_eq!(swapped.hour, original.min);
    assert_eq!(
        BrokenDownTime {
            min: original.min,
            hour: original.hour,
            ..swapped
        },
        original
    );
}

#[test]
fn extreme_values() {
    let tm = BrokenDownTime {
        sec: c_int::MAX,
        min: c_int::MIN,
        hour: -1,
        mday: 0,
        mon: 12,
        year: c_int::MAX,
        wday: 7,
        yday: 366,
        isdst: -1,
    };
    assert_eq!(BrokenDownTime::decode(&tm.encode()).unwrap(), tm);
}

#[test]
fn random_round_trips() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let mut values = [0 as c_int; 9];
        for v in values.iter_mut() {
            *v = rng.gen();
        }
        let tuple = Tuple::from(values);
        assert_eq!(BrokenDownTime::decode(&tuple).unwrap().encode(), tuple);
    }
}

#[test]
fn rejects_int64_fields() {
    let tuple = Tuple::from([0i64; 9]);
    assert_eq!(
        BrokenDownTime::decode(&tuple),
        Err(Error::FieldMismatch {
            shape: Shape::Tm,
            index: 0,
            expected: FieldKind::Int,
            found: FieldKind::Int64,
        })
    );
}

#[test]
fn rejects_short_tuple() {
    let tuple = Tuple::from([0 as c_int; 8]);
    assert_eq!(
        BrokenDownTime::decode(&tuple),
        Err(Error::ArityMismatch {
            shape: Shape::Tm,
            expected: 9,
            found: 8,
        })
    );
}
