//! Sequential color ramps.
//!
//! Each ramp is a nine-stop ColorBrewer sequential scheme turned into a
//! continuous function with a uniform cubic B-spline through the stops, per
//! RGB channel. Sampling is pure: the same `(ramp, t)` always yields the
//! same color.

use crate::color::Color;
use serde::{Deserialize, Serialize};

const REDS: [[u8; 3]; 9] = [
    [255, 245, 240],
    [254, 224, 210],
    [252, 187, 161],
    [252, 146, 114],
    [251, 106, 74],
    [239, 59, 44],
    [203, 24, 29],
    [165, 15, 21],
    [103, 0, 13],
];

const BLUES: [[u8; 3]; 9] = [
    [247, 251, 255],
    [222, 235, 247],
    [198, 219, 239],
    [158, 202, 225],
    [107, 174, 214],
    [66, 146, 198],
    [33, 113, 181],
    [8, 81, 156],
    [8, 48, 107],
];

const GREENS: [[u8; 3]; 9] = [
    [247, 252, 245],
    [229, 245, 224],
    [199, 233, 192],
    [161, 217, 155],
    [116, 196, 118],
    [65, 171, 93],
    [35, 139, 69],
    [0, 109, 44],
    [0, 68, 27],
];

/// Hue family of a sequential ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ramp {
    /// Light pink to dark red
    Reds,
    /// Light blue to navy
    Blues,
    /// Light green to dark green
    Greens,
}

impl Ramp {
    /// Ramps in the order categories cycle through them.
    pub const CYCLE: [Self; 3] = [Self::Reds, Self::Blues, Self::Greens];

    /// Ramp used for the category at `index` (`index mod 3`).
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        Self::CYCLE[index % 3]
    }

    fn stops(self) -> &'static [[u8; 3]; 9] {
        match self {
            Self::Reds => &REDS,
            Self::Blues => &BLUES,
            Self::Greens => &GREENS,
        }
    }

    /// Sample the ramp at `t`; values outside [0, 1] clamp to the ends.
    #[must_use]
    pub fn sample(self, t: f64) -> Color {
        let stops = self.stops();
        let [r, g, b] = [0usize, 1, 2].map(|channel| {
            let values: [f64; 9] = std::array::from_fn(|k| f64::from(stops[k][channel]));
            basis_spline(&values, t).round().clamp(0.0, 255.0) as u8
        });
        Color::from_rgb8(r, g, b)
    }
}

/// Uniform cubic B-spline through `values`, with reflected phantom points at
/// both ends so the curve starts and finishes exactly on the first and last value.
fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let (t, i) = if t.is_nan() || t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };

    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 { values[i + 2] } else { 2.0 * v2 - v1 };

    let t1 = (t - i as f64 / n as f64) * n as f64;
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}
