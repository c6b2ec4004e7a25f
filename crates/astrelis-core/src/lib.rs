//! Astrelis Core
//!
//! Shared foundation for the Astrelis crates: math, geometry, collections,
//! animation primitives, logging and profiling.

pub mod alloc;
pub mod animation;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
