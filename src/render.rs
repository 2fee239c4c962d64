// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The frame rasterizer.  For a single exponent, every pixel of the
//! integral plane is mapped onto the complex plane, run through the
//! evaluator, quantised through the palette, and written into a
//! frame.  Two strategies are offered: a plain double loop, and a
//! threaded version in which workers pull whole rows off a shared
//! queue and write only the rows they took.

use crossbeam;
use image::{GrayImage, ImageBuffer, Luma};
use itertools::iproduct;
use std::any::Any;
use std::sync::Mutex;

use errors::{Error, Result};
use escape::Evaluator;
use palette::Palette;
use planes::{Pixel, PlaneMapper};

/// One rendered image: a row-major grid of palette indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Frame {
    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The palette indices, row by row.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The palette index at a pixel.
    pub fn get(&self, pixel: &Pixel) -> u8 {
        self.pixels[pixel.1 * self.width + pixel.0]
    }

    /// Resolve the indices into grey levels.
    pub fn to_image(&self, palette: Palette) -> GrayImage {
        let width = self.width;
        ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
            Luma([palette.gray_of(self.pixels[(y as usize) * width + (x as usize)])])
        })
    }
}

/// Everything a frame needs that does not change while it is drawn.
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    plane: PlaneMapper,
    evaluator: Evaluator,
    palette: Palette,
}

impl FrameRenderer {
    /// Bundle a plane, an evaluator and a palette.
    pub fn new(plane: PlaneMapper, evaluator: Evaluator, palette: Palette) -> Self {
        FrameRenderer {
            plane,
            evaluator,
            palette,
        }
    }

    /// The plane being rendered.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The palette frames are quantised into.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    #[inline]
    fn shade(&self, column: usize, row: usize, power: f64) -> u8 {
        let point = self.plane.pixel_to_point(&Pixel(column, row));
        self.palette.index_of(self.evaluator.intensity(point, power))
    }

    fn fill_row(&self, row: usize, line: &mut [u8], power: f64) {
        for (column, cell) in line.iter_mut().enumerate() {
            *cell = self.shade(column, row, power);
        }
    }

    /// Single-threaded rendering, rows then columns.
    pub fn render_single(&self, power: f64) -> Frame {
        let (width, height) = (self.plane.width(), self.plane.height());
        let mut pixels = vec![0u8; self.plane.len()];
        for (row, column) in iproduct!(0..height, 0..width) {
            pixels[row * width + column] = self.shade(column, row, power);
        }
        Frame {
            width,
            height,
            pixels,
        }
    }

    /// Multi-threaded rendering.  Each row is claimed by exactly one
    /// worker; the frame is complete when the scope joins.
    pub fn render(&self, power: f64, threads: usize) -> Result<Frame> {
        if threads == 0 {
            return Err(Error::Threads);
        }
        if threads == 1 {
            return Ok(self.render_single(power));
        }

        let (width, height) = (self.plane.width(), self.plane.height());
        let mut pixels = vec![0u8; self.plane.len()];
        {
            let rows = Mutex::new(pixels.chunks_mut(width).enumerate());
            let rows = &rows;
            crossbeam::scope(|spawner| {
                for _ in 0..threads {
                    spawner.spawn(move |_| loop {
                        let row = match rows.lock() {
                            Ok(mut queue) => queue.next(),
                            Err(_) => None,
                        };
                        match row {
                            Some((row, line)) => self.fill_row(row, line, power),
                            None => break,
                        }
                    });
                }
            })
            .map_err(|e| Error::Render(panic_message(&*e)))?;
        }
        trace!("rendered p={:.2} on {} threads", power, threads);

        Ok(Frame {
            width,
            height,
            pixels,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "a render worker panicked".to_string()
    }
}
