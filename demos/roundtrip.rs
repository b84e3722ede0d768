extern crate posix_time_codec;

use nix::time::{clock_gettime, ClockId};
use posix_time_codec::{wire, BrokenDownTime, FromInner, Shape, TimeSpec, TupleCodec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let now = clock_gettime(ClockId::CLOCK_REALTIME)?;
    let raw: libc::timespec = *now.as_ref();

    let ts = TimeSpec::from_inner(raw);
    let tuple = ts.encode();
    println!("timespec {:?} -> {:?}", ts, tuple);

    let bytes = ts.to_wire();
    println!("wire ({} bytes): {:02x?}", bytes.len(), bytes);
    assert_eq!(wire::read(Shape::TimeSpec, &bytes)?, tuple);
    assert_eq!(TimeSpec::decode(&tuple)?, ts);

    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    if unsafe { libc::gmtime_r(&raw.tv_sec, &mut tm) }.is_null() {
        return Err("gmtime_r failed".into());
    }
    let tm = BrokenDownTime::from_inner(tm);
    println!("tm {:?} -> {:?}", tm, tm.encode());

    println!("shapes supported: {:?}", posix_time_codec::Shapes::supported());
    Ok(())
}
