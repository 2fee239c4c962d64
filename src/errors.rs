// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The error type shared by every stage of the renderer.  The numeric
//! core itself never fails; everything here is either a bad
//! configuration caught before rendering starts, a worker thread that
//! died, or the output file refusing to be written.

use std::io;

/// Everything that can stop an animation from being produced.
#[derive(Debug, Fail)]
pub enum Error {
    /// The two planes could not be related to each other.
    #[fail(display = "invalid plane: {}", _0)]
    Plane(String),

    /// The exponent sweep parameters were unusable.
    #[fail(display = "invalid sweep: {}", _0)]
    Sweep(String),

    /// A zero thread count was requested.
    #[fail(display = "thread count must be at least 1")]
    Threads,

    /// A rendering worker panicked before finishing its rows.
    #[fail(display = "render failure: {}", _0)]
    Render(String),

    /// The image is too large for the output format.
    #[fail(display = "image dimensions {}x{} exceed the GIF limit of 65535", _0, _1)]
    Dimensions(usize, usize),

    /// The output could not be written.
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = ::std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: Error = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        match err {
            Error::Io(ref inner) => assert_eq!(inner.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("expected an Io error, got {:?}", err),
        }
    }

    #[test]
    fn messages_are_readable() {
        assert_eq!(
            format!("{}", Error::Dimensions(70000, 10)),
            "image dimensions 70000x10 exceed the GIF limit of 65535"
        );
        assert_eq!(format!("{}", Error::Threads), "thread count must be at least 1");
    }
}
