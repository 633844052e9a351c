//! Embedded equation list
//!
//! Equation corpus compiled into the binary at build time.

// Include generated equation list from build script
include!(concat!(env!("OUT_DIR"), "/equations.rs"));
