//! Easing curves for snap animations
//!
//! The named curves are the CSS/Material cubic beziers, so a snap tuned in a
//! design tool looks the same here.

use serde::{Deserialize, Serialize};

/// Maps linear progress (0.0 to 1.0) onto eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// `cubic-bezier(0.25, 0.1, 0.25, 1.0)`
    #[default]
    Ease,
    /// `cubic-bezier(0.42, 0.0, 1.0, 1.0)`
    EaseIn,
    /// `cubic-bezier(0.0, 0.0, 0.58, 1.0)`
    EaseOut,
    /// `cubic-bezier(0.42, 0.0, 0.58, 1.0)`
    EaseInOut,
    /// Material standard curve, `cubic-bezier(0.4, 0.0, 0.2, 1.0)`
    FastOutSlowIn,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Control points `(x1, y1, x2, y2)` of the curve, `None` for linear.
    pub fn control_points(&self) -> Option<(f32, f32, f32, f32)> {
        match *self {
            Easing::Linear => None,
            Easing::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::FastOutSlowIn => Some((0.4, 0.0, 0.2, 1.0)),
            Easing::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// Apply the curve to `t`. Input is clamped, endpoints are exact.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => UnitBezier::new(x1, y1, x2, y2).solve(f64::from(t)) as f32,
        }
    }
}

/// Cubic bezier from `(0, 0)` to `(1, 1)` in power form.
///
/// With control points `p1` and `p2` on one axis the curve is
/// `B(s) = 3(1-s)²s·p1 + 3(1-s)s²·p2 + s³`, which expands to
/// `a·s³ + b·s² + c·s` with `c = 3·p1`, `b = 3(p2 - p1) - c` and
/// `a = 1 - c - b`. Coefficients are kept in f64 so consecutive frames of a
/// snap never step backwards from rounding.
#[derive(Clone, Copy, Debug)]
struct UnitBezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl UnitBezier {
    const EPSILON: f64 = 1e-7;

    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let (ax, bx, cx) = Self::coefficients(f64::from(x1), f64::from(x2));
        let (ay, by, cy) = Self::coefficients(f64::from(y1), f64::from(y2));
        Self { ax, bx, cx, ay, by, cy }
    }

    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        (1.0 - c - b, b, c)
    }

    fn x_at(&self, s: f64) -> f64 {
        ((self.ax * s + self.bx) * s + self.cx) * s
    }

    fn y_at(&self, s: f64) -> f64 {
        ((self.ay * s + self.by) * s + self.cy) * s
    }

    /// `dx/ds = 3a·s² + 2b·s + c`
    fn dx_at(&self, s: f64) -> f64 {
        (3.0 * self.ax * s + 2.0 * self.bx) * s + self.cx
    }

    /// Eased value for progress `x` in `(0, 1)`
    fn solve(&self, x: f64) -> f64 {
        self.y_at(self.param_for(x))
    }

    /// Find `s` with `x_at(s) == x`.
    ///
    /// Newton steps converge in a few iterations on typical curves. A flat
    /// slope (control points near the ends) falls back to bisection, which
    /// is slower but always lands since `x_at` is monotonic on `[0, 1]`.
    fn param_for(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..8 {
            let err = self.x_at(s) - x;
            if err.abs() < Self::EPSILON {
                return s;
            }
            let slope = self.dx_at(s);
            if slope.abs() < Self::EPSILON {
                break;
            }
            s -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = x;
        for _ in 0..24 {
            let val = self.x_at(s);
            if (val - x).abs() < Self::EPSILON {
                break;
            }
            if val < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        s
    }
}
