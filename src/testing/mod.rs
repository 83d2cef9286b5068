//! Testing utilities for camguard
//!
//! Synthetic frames that reproduce the typical look of healthy and
//! tampered camera feeds, for offline tests and benchmarks.

pub mod synthetic_data;

pub use synthetic_data::{
    synthetic_frame,
    synthetic_rgb_frame,
    SyntheticPattern
};
