//! Per-section progress bookkeeping.
//!
//! [`ProgressAllocator`] holds one value per section and guarantees that
//! their sum never exceeds the bar's capacity. Two value kinds are provided:
//! normalised fractions ([`FractionAllocator`], capacity `1.0`) and whole
//! steps ([`StepAllocator`], capacity = total step budget).

pub mod allocator;
pub mod value;

pub use allocator::ProgressAllocator;
pub use value::ProgressValue;

/// Fractional progress, capacity `1.0`.
pub type FractionAllocator = ProgressAllocator<f32>;

/// Step-based progress, capacity = total number of steps.
pub type StepAllocator = ProgressAllocator<i32>;
