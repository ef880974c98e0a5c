//! Build script
//!
//! Bakes a coarse, second-resolution timestamp into the crate so that
//! engines constructed without an explicit seed still get a value that
//! differs between builds. The value is **not** random and must never be
//! used where unpredictability matters.
//!
//! When `SOURCE_DATE_EPOCH` is set (reproducible builds), it replaces the
//! wall clock.

use std::env;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let epoch = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });

    // Seconds since midnight, the same granularity as a HH:MM:SS build stamp.
    let seconds = epoch % 86_400;

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("build_seed.rs");

    fs::write(
        &dest,
        format!("pub(crate) const BUILD_SEED: u64 = {seconds};\n"),
    )
    .expect("failed to write build_seed.rs");
}
