// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writers for the finished product: the animated GIF, and a single
//! frame as a binary graymap.

use gif::{self, Repeat, SetParameter};
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use animation::Animation;
use errors::{Error, Result};
use palette::Palette;
use render::Frame;

fn gif_dimensions(width: usize, height: usize) -> Result<(u16, u16)> {
    if width > usize::from(::std::u16::MAX) || height > usize::from(::std::u16::MAX) {
        return Err(Error::Dimensions(width, height));
    }
    Ok((width as u16, height as u16))
}

/// Encode an animation as a GIF89a stream.  The palette becomes the
/// global colour table and the loop count goes into the NETSCAPE
/// extension as-is.
pub fn write_gif<W: Write>(writer: W, animation: &Animation) -> Result<()> {
    let (width, height) = gif_dimensions(animation.width(), animation.height())?;
    let mut encoder = gif::Encoder::new(writer, width, height, &animation.palette().rgb_table())?;
    encoder.set(Repeat::Finite(animation.loop_count()))?;

    for (frame, &delay) in animation.frames().iter().zip(animation.delays()) {
        let mut out = gif::Frame::default();
        out.width = width;
        out.height = height;
        out.delay = delay;
        out.buffer = Cow::Borrowed(frame.pixels());
        encoder.write_frame(&out)?;
    }
    // The trailer is written when the encoder drops.
    Ok(())
}

/// Create (or truncate) `path` and write the animation into it.
pub fn save_gif<P: AsRef<Path>>(path: P, animation: &Animation) -> Result<()> {
    let output = File::create(path.as_ref())?;
    let mut output = BufWriter::new(output);
    write_gif(&mut output, animation)?;
    output.flush()?;
    info!(
        "wrote {} frames to {}",
        animation.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Write a single frame as a binary PGM, resolving its palette indices
/// into grey levels.
pub fn save_graymap<P: AsRef<Path>>(path: P, frame: &Frame, palette: Palette) -> Result<()> {
    let output = File::create(path.as_ref())?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
    let pixels = frame.to_image(palette).into_raw();
    encoder.encode(
        &pixels[..],
        frame.width() as u32,
        frame.height() as u32,
        ColorType::Gray(8),
    )?;
    info!("wrote still frame to {}", path.as_ref().display());
    Ok(())
}
