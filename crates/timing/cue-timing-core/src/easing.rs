//! Easing curves used to redistribute stagger offsets.
//!
//! Named eases map to the conventional cubic-bezier control points; a
//! custom curve supplies (x1, y1, x2, y2) directly. Evaluation inverts the
//! x bezier by binary search, then evaluates y at the recovered parameter.

use serde::{Deserialize, Serialize};

use crate::error::TimingError;

/// Canonical control points for the named eases. Kept as constants so the
/// exact curve shape is a single place to adjust.
pub const EASE_IN: [f32; 4] = [0.42, 0.0, 1.0, 1.0];
pub const EASE_OUT: [f32; 4] = [0.0, 0.0, 0.58, 1.0];
pub const EASE_IN_OUT: [f32; 4] = [0.42, 0.0, 0.58, 1.0];

/// A monotonic remapping of normalized distance in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Custom cubic-bezier control points (x1, y1, x2, y2).
    CubicBezier([f32; 4]),
}

impl Easing {
    /// Control points backing this curve; None for the identity map.
    #[inline]
    pub fn control_points(&self) -> Option<[f32; 4]> {
        match self {
            Self::Linear => None,
            Self::EaseIn => Some(EASE_IN),
            Self::EaseOut => Some(EASE_OUT),
            Self::EaseInOut => Some(EASE_IN_OUT),
            Self::CubicBezier(ctrl) => Some(*ctrl),
        }
    }

    /// Validate custom control points: all coordinates finite and in [0, 1]
    /// (the timing axis must stay invertible).
    pub fn validate(&self) -> Result<(), TimingError> {
        if let Self::CubicBezier(ctrl) = self {
            if ctrl.iter().any(|c| !c.is_finite() || *c < 0.0 || *c > 1.0) {
                return Err(TimingError::InvalidStaggerSpec {
                    reason: format!("bezier control points must lie in [0, 1], got {ctrl:?}"),
                });
            }
        }
        Ok(())
    }

    /// Remap t in [0, 1] through the curve.
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        match self.control_points() {
            None => t.clamp(0.0, 1.0),
            Some(ctrl) => bezier_ease(t, ctrl),
        }
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1], compute
/// the eased y by inverting the x bezier via binary search. Monotonic X in
/// [0,1] is guaranteed by `Easing::validate`.
fn bezier_ease(t: f32, ctrl: [f32; 4]) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let [x1, y1, x2, y2] = ctrl;
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}
