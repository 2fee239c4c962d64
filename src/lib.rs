#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Multibrot animation renderer
//!
//! The Mandelbrot set takes a point `c` on the complex plane and
//! repeatedly squares a running value, adding `c` each time, measuring
//! how quickly that value goes to infinity.  Nothing about the
//! iteration demands that the exponent be two: raising the running
//! value to any real power `p` gives a family of "Multibrot" sets,
//! which grow extra lobes as `p` climbs.
//!
//! This crate renders one greyscale frame per exponent across a sweep
//! (by default `p = 1.0, 1.02, 1.04, ...`) and strings the frames
//! together into an animated GIF, so the set can be watched as it
//! sprouts its lobes.  Each frame is computed with the pixels split
//! across worker threads; the frames themselves are computed one after
//! another.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate gif;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

#[cfg(test)]
extern crate tempfile;

pub mod animation;
pub mod errors;
pub mod escape;
pub mod output;
pub mod palette;
pub mod planes;
pub mod render;
pub mod sweep;

pub use animation::Animation;
pub use errors::{Error, Result};
pub use escape::{Escape, Evaluator};
pub use output::{save_gif, save_graymap, write_gif};
pub use palette::Palette;
pub use planes::{Pixel, PlaneMapper};
pub use render::{Frame, FrameRenderer};
pub use sweep::Sweep;
