use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=POSIX_TIME_CODEC_ITIMERSPEC");
    println!("cargo:rustc-check-cfg=cfg(has_itimerspec)");

    let vendor = env::var("CARGO_CFG_TARGET_VENDOR").unwrap_or_default();
    let family = env::var("CARGO_CFG_TARGET_FAMILY").unwrap_or_default();
    let detected = vendor != "apple" && family.split(',').any(|f| f == "unix");

    let enabled = match env::var("POSIX_TIME_CODEC_ITIMERSPEC").as_deref() {
        Ok("0") => false,
        Ok("1") => true,
        Ok(other) => panic!(
            "POSIX_TIME_CODEC_ITIMERSPEC must be 0 or 1, got {:?}",
            other
        ),
        Err(_) => detected,
    };

    if enabled && env::var_os("CARGO_FEATURE_NO_ITIMERSPEC").is_none() {
        println!("cargo:rustc-cfg=has_itimerspec");
    }
}
