// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The animation assembler.  Walks the exponent sweep one value at a
//! time, asks the rasterizer for a frame, and collects the frames and
//! their delays.  Frames are never rendered concurrently with one
//! another; only the pixels inside a frame are.

use std::time::Instant;

use errors::Result;
use palette::Palette;
use render::{Frame, FrameRenderer};

/// Per-frame delay, in hundredths of a second.
pub const DELAY: u16 = 8;

/// Value written to the loop-count field of the output.
pub const LOOP_COUNT: u16 = 200;

/// A finished sequence of frames, ready to be encoded.
#[derive(Clone, Debug)]
pub struct Animation {
    width: usize,
    height: usize,
    frames: Vec<Frame>,
    delays: Vec<u16>,
    loop_count: u16,
    palette: Palette,
}

impl Animation {
    /// Render one frame for every exponent of the sweep.  Frames are
    /// pushed as they arrive; the sweep's length is only a hint, and a
    /// huge bound must not turn into a huge allocation.
    pub fn assemble<I>(
        renderer: &FrameRenderer,
        sweep: I,
        threads: usize,
        delay: u16,
        loop_count: u16,
    ) -> Result<Animation>
    where
        I: IntoIterator<Item = f64>,
    {
        let sweep = sweep.into_iter();
        let total = sweep.size_hint().0;
        let mut frames = Vec::new();
        let mut delays = Vec::new();
        let started = Instant::now();

        for (i, power) in sweep.enumerate() {
            let clock = Instant::now();
            frames.push(renderer.render(power, threads)?);
            delays.push(delay);
            debug!(
                "frame {}/{} p={:.2} in {:?}",
                i + 1,
                total,
                power,
                clock.elapsed()
            );
        }

        info!("rendered {} frames in {:?}", frames.len(), started.elapsed());
        Ok(Animation {
            width: renderer.plane().width(),
            height: renderer.plane().height(),
            frames,
            delays,
            loop_count,
            palette: renderer.palette(),
        })
    }

    /// Width of every frame.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of every frame.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when the sweep was empty.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frames, in sweep order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// One delay per frame.
    pub fn delays(&self) -> &[u16] {
        &self.delays
    }

    /// The loop-count field.
    pub fn loop_count(&self) -> u16 {
        self.loop_count
    }

    /// The palette every frame is indexed against.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// The frame for the highest exponent, if any.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}
