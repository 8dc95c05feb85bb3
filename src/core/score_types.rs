//! Type-safe score scales for the analytics layer.
//!
//! Two scales appear throughout the scoring functions: entity risk,
//! influence, and stability use 0-10, while confidence and data-quality
//! scores use 0-100. Encoding the scale in the type keeps the two from
//! being mixed accidentally.
//!
//! Both constructors clamp out-of-range input rather than failing; every
//! documented output bound in the scoring contracts is enforced here.

use serde::{Deserialize, Serialize};

/// Score on the 0-10 scale used for risk, influence, and stability.
///
/// Values are clamped to [0.0, 10.0] on construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score0To10(f64);

impl Score0To10 {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 10.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Score on the 0-100 scale used for confidence and data quality.
///
/// Values are clamped to [0.0, 100.0] on construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score0To100(f64);

impl Score0To100 {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Score0To10 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl std::fmt::Display for Score0To100 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
