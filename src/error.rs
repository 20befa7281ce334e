// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::ev::DeviceId;

use std::error;
use std::fmt::{self, Display, Formatter};
use std::io;

/// Errors that can happen while setting up the visualizer.
///
/// Once the controller is running, input problems are never reported as errors: unknown events,
/// buttons and devices are dropped.
#[derive(Debug)]
pub enum Error {
    /// Font file could not be read.
    Io(io::Error),
    /// Data is not a TrueType or OpenType font.
    InvalidFont,
    /// Device index is not smaller than `MAX_DEVICES`.
    InvalidDevice(DeviceId),
    /// Movement threshold is outside of `MIN_THRESHOLD..=MAX_THRESHOLD`.
    InvalidThreshold(f32),
    /// Gamepad backend failed to initialize.
    InputBackend(String),
    /// Window could not be created or failed while running.
    Window(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Error::Io(ref e) => write!(f, "failed to read font: {}", e),
            Error::InvalidFont => f.write_str("file is not a TrueType or OpenType font"),
            Error::InvalidDevice(id) => write!(f, "device index {} is out of range", id),
            Error::InvalidThreshold(t) => write!(f, "threshold {} is out of range", t),
            Error::InputBackend(ref msg) => write!(f, "gamepad input is not available: {}", msg),
            Error::Window(ref msg) => write!(f, "window error: {}", msg),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidDevice(9).to_string(),
            "device index 9 is out of range"
        );
        assert_eq!(
            Error::InputBackend("no udev".to_owned()).to_string(),
            "gamepad input is not available: no udev"
        );
    }

    #[test]
    fn io_source() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
        assert!(Error::InvalidFont.source().is_none());
    }
}
