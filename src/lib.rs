// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! padview - interactive gamepad state visualizer
//! ==============================================
//!
//! Shows live state of up to eight joysticks: analog axes as bars and stick pads, buttons as
//! lamps. Input and drawing are abstracted behind [`DeviceQuery`] and [`Surface`], so everything
//! in this crate can run without a window or a real device.
//!
//! Example
//! -------
//!
//! ```
//! use padview::{AxisKind, Controller, DeviceQuery, Event, Font, Identification};
//!
//! struct OnePad;
//!
//! impl DeviceQuery for OnePad {
//!     fn is_connected(&self, id: usize) -> bool {
//!         id == 0
//!     }
//!
//!     fn identification(&self, id: usize) -> Identification {
//!         if id == 0 {
//!             Identification::named("Wireless Controller")
//!         } else {
//!             Identification::unknown()
//!         }
//!     }
//! }
//!
//! let font = Font::from_bytes("font", vec![0, 1, 0, 0]).unwrap();
//! let mut controller = Controller::new(&font, &OnePad);
//!
//! controller.handle_event(
//!     &Event::JoystickMoved { joystick_id: 0, axis: AxisKind::X, position: 100.0 },
//!     &OnePad,
//! );
//!
//! let pad = controller.gamepad_layout().widgets().pad(AxisKind::X).unwrap();
//! assert_eq!(pad.x(), 100.0);
//! ```
//!
//! Controls
//! --------
//!
//! | Key     | Action                               |
//! |---------|--------------------------------------|
//! | `0`-`7` | Select joystick                      |
//! | `Tab`   | Switch between gamepad and generic   |
//! | `Up`    | Raise movement threshold by 0.1      |
//! | `Down`  | Lower movement threshold by 0.1      |
//! | `Esc`   | Quit                                 |

#[macro_use]
extern crate log;

pub mod backend;
pub mod constants;
mod controller;
mod device;
mod error;
pub mod ev;
pub mod layout;
mod selector;
pub mod shell;
pub mod surface;
pub mod widget;

#[cfg(test)]
mod test_utils;

pub use crate::backend::GilrsDevices;
pub use crate::controller::{Controller, ControllerBuilder, Mode};
pub use crate::device::{ConnectionStatus, DeviceQuery, Identification};
pub use crate::error::Error;
pub use crate::ev::{AxisKind, ButtonIndex, DeviceId, Event, KeyCode};
pub use crate::layout::Layout;
pub use crate::selector::{DeviceSelector, Slot};
pub use crate::surface::{Font, Surface};
