//! Host-side helpers shared by the drivers.

/// Frame delta measurement.
pub mod frame_clock;

pub use frame_clock::FrameClock;
