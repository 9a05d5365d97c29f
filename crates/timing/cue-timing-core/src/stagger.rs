//! Stagger distribution: per-item delay offsets from an item count, an
//! origin policy, and an easing redistribution.
//!
//! Model:
//! - Each item gets a distance from the origin item (index units).
//! - Distances are normalized by the largest distance and remapped through
//!   the curve, then scaled into the total span `(count - 1) * step`.
//! - The curve redistributes the span; it never changes the span itself,
//!   and the origin item always lands exactly on `start_delay`.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::TimingError;

/// Which item sits at the zero-offset point distances are measured from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum StaggerOrigin {
    #[default]
    First,
    Last,
    Center,
    /// A specific item index; must lie inside `[0, count - 1]`.
    Index(usize),
}

/// Declarative stagger request. Immutable; consumed per `plan` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaggerSpec {
    /// Per-distance-unit delay in seconds.
    pub step: f32,
    /// Base delay added to every offset, in seconds.
    #[serde(default)]
    pub start_delay: f32,
    #[serde(default)]
    pub origin: StaggerOrigin,
    #[serde(default)]
    pub curve: Easing,
}

impl StaggerSpec {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            start_delay: 0.0,
            origin: StaggerOrigin::default(),
            curve: Easing::default(),
        }
    }

    fn validate(&self, item_count: usize) -> Result<(), TimingError> {
        if !self.step.is_finite() || self.step < 0.0 {
            return Err(TimingError::InvalidStaggerSpec {
                reason: format!("step must be finite and >= 0, got {}", self.step),
            });
        }
        if !self.start_delay.is_finite() || self.start_delay < 0.0 {
            return Err(TimingError::InvalidStaggerSpec {
                reason: format!("start_delay must be finite and >= 0, got {}", self.start_delay),
            });
        }
        self.curve.validate()?;
        if let StaggerOrigin::Index(k) = self.origin {
            if item_count == 0 || k > item_count - 1 {
                return Err(TimingError::InvalidOriginIndex {
                    index: k,
                    count: item_count,
                });
            }
        }
        Ok(())
    }
}

/// Distance of item `i` from the origin, in index units. Center distances
/// are fractional for even counts (4 items -> center at 1.5).
#[inline]
fn distance(i: usize, count: usize, origin: StaggerOrigin) -> f32 {
    match origin {
        StaggerOrigin::First => i as f32,
        StaggerOrigin::Last => (count - 1 - i) as f32,
        StaggerOrigin::Center => {
            let center = (count - 1) as f32 / 2.0;
            (i as f32 - center).abs()
        }
        StaggerOrigin::Index(k) => (i as f32 - k as f32).abs(),
    }
}

/// Compute per-item delay offsets in seconds.
///
/// Pure and deterministic: safe to memoize by `(item_count, spec)`.
pub fn plan(item_count: usize, spec: &StaggerSpec) -> Result<Vec<f32>, TimingError> {
    spec.validate(item_count)?;

    match item_count {
        0 => Ok(Vec::new()),
        1 => Ok(vec![spec.start_delay]),
        _ => {
            let span = (item_count - 1) as f32 * spec.step;
            let max_distance = (0..item_count)
                .map(|i| distance(i, item_count, spec.origin))
                .fold(0.0f32, f32::max);

            let offsets = (0..item_count)
                .map(|i| {
                    let d = distance(i, item_count, spec.origin);
                    let normalized = if max_distance > 0.0 { d / max_distance } else { 0.0 };
                    spec.start_delay + spec.curve.evaluate(normalized) * span
                })
                .collect();
            Ok(offsets)
        }
    }
}
