use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One slice of the wheel.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum WheelSegment {
    Points(u32),
    Bankrupt,
    LoseATurn,
}

impl fmt::Display for WheelSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelSegment::Points(points) => write!(f, "${}", points),
            WheelSegment::Bankrupt => write!(f, "Bankrupt"),
            WheelSegment::LoseATurn => write!(f, "Lose a Turn"),
        }
    }
}

/// The wheel players spin at the start of a turn. The segment set is fixed
/// when the wheel is built and never empty.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct SpinWheel {
    segments: Vec<WheelSegment>,
}

impl SpinWheel {
    /// The standard wheel: $100 through $1000 in steps of 100, then
    /// `Bankrupt` and `LoseATurn`.
    #[must_use]
    pub fn new() -> Self {
        let segments = (1..=10)
            .map(|n| WheelSegment::Points(n * 100))
            .chain(vec![WheelSegment::Bankrupt, WheelSegment::LoseATurn])
            .collect();
        Self { segments }
    }

    pub fn with_segments(segments: Vec<WheelSegment>) -> Result<Self, WheelError> {
        if segments.is_empty() {
            Err(WheelError::NoSegments)
        } else {
            Ok(Self { segments })
        }
    }

    pub fn segments(&self) -> &'_ [WheelSegment] {
        &self.segments
    }

    /// Draw one segment uniformly at random.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> WheelSegment {
        self.segments[rng.gen_range(0, self.segments.len())]
    }
}

impl Default for SpinWheel {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WheelError {
    #[error("A wheel needs at least one segment")]
    NoSegments,
}
