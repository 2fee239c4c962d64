// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.  A Multibrot point `c` is iterated as
//! `v = v^p + c` starting from zero; the number of steps it takes for
//! `v` to leave the circle of radius 2 is what gets painted.

use num::Complex;

/// The default iteration budget per point.
pub const ITERATIONS: u32 = 200;

/// The default number of grey levels lost per iteration.
pub const CONTRAST: u8 = 15;

/// The grey level of a point that never escapes.
pub const IN_SET: u8 = 0;

/// What happened to a point after iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Escape {
    /// The orbit left the radius-2 circle on the given (0-based) step.
    Escaped(u32),
    /// The orbit stayed inside for the whole budget.
    Bounded,
}

impl Escape {
    /// Convert an escape into a grey level.  The fall-off is computed
    /// modulo 256, so slow escapes wrap back around into the bright
    /// range and produce the banding the renderer is known for.
    pub fn intensity(self, contrast: u8) -> u8 {
        match self {
            Escape::Escaped(n) => 255u8.wrapping_sub(u32::from(contrast).wrapping_mul(n) as u8),
            Escape::Bounded => IN_SET,
        }
    }
}

/// The immutable parameters of the iteration.  Shared by every worker
/// during a frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Evaluator {
    /// Maximum number of iterations before a point is declared bounded.
    pub iterations: u32,
    /// Grey levels subtracted per iteration before escape.
    pub contrast: u8,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator {
            iterations: ITERATIONS,
            contrast: CONTRAST,
        }
    }
}

impl Evaluator {
    /// Build an evaluator with a custom budget and contrast.
    pub fn new(iterations: u32, contrast: u8) -> Self {
        Evaluator {
            iterations,
            contrast,
        }
    }

    /// Iterate `v = v^power + point` from zero, returning the step on
    /// which `|v|` first exceeded 2.
    pub fn escape_time(&self, point: Complex<f64>, power: f64) -> Escape {
        let mut v = Complex::new(0.0_f64, 0.0_f64);
        for n in 0..self.iterations {
            v = v.powf(power) + point;
            if v.norm_sqr() > 4.0 {
                return Escape::Escaped(n);
            }
        }
        Escape::Bounded
    }

    /// The grey level of a point.
    #[inline]
    pub fn intensity(&self, point: Complex<f64>, power: f64) -> u8 {
        self.escape_time(point, power).intensity(self.contrast)
    }
}
