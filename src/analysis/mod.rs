//! Frame statistics module
//!
//! Closed-form statistics the tamper scorers are built on: the intensity
//! histogram, mean and standard deviation, Laplacian variance as a
//! sharpness proxy, and edge density from a hysteresis edge detector.
pub mod edges;
pub mod histogram;
pub mod intensity;
pub mod laplacian;
pub mod stats;

pub use histogram::Histogram;
pub use stats::{BandDistribution, FrameStats};
