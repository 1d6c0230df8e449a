//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the sidecar is up.
//!
//! # Tasks
//! - Sweep: drops expired responses so `len()` stops counting them

mod sweep;

pub use sweep::spawn_sweep_task;
