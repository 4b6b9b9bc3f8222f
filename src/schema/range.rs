//! Randomizable integer ranges with per-bound inclusivity.

use rand::Rng;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// An integer range with independently inclusive or exclusive bounds.
///
/// Hosts persist these as configuration and playback resolves each one to a
/// single value at session start, so a sequence can, say, loop 2 to 4 times
/// with the count drawn fresh on every play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    /// Lower bound.
    #[serde(default)]
    pub min_value: u32,
    /// Upper bound.
    #[serde(default)]
    pub max_value: u32,
    /// Whether the lower bound itself can be drawn.
    #[serde(default = "default_true")]
    pub min_inclusive: bool,
    /// Whether the upper bound itself can be drawn.
    #[serde(default = "default_true")]
    pub max_inclusive: bool,
}

impl Default for FrameRange {
    fn default() -> Self {
        Self {
            min_value: 0,
            max_value: 0,
            min_inclusive: true,
            max_inclusive: true,
        }
    }
}

impl FrameRange {
    /// An inclusive range over `min..=max`.
    pub fn new(min_value: u32, max_value: u32) -> Self {
        Self {
            min_value,
            max_value,
            ..Self::default()
        }
    }

    /// A degenerate range that always resolves to `value`.
    pub fn fixed(value: u32) -> Self {
        Self::new(value, value)
    }

    /// Draw one value uniformly from the range.
    ///
    /// Exclusive bounds shift the corresponding edge inward by one. A range
    /// whose effective low meets or passes its effective high resolves to
    /// the effective low without consulting the RNG, so degenerate
    /// configurations stay deterministic rather than failing.
    pub fn resolve(&self, rng: &mut impl Rng) -> u32 {
        let lo = if self.min_inclusive {
            self.min_value
        } else {
            self.min_value.saturating_add(1)
        };
        let hi = if self.max_inclusive {
            self.max_value
        } else {
            self.max_value.saturating_sub(1)
        };
        if hi <= lo {
            return lo;
        }
        rng.gen_range(lo..=hi)
    }
}
