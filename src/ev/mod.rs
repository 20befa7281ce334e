// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Input events consumed by the visualizer.
//!
//! Events are produced by the host (window and input backend) and handed to
//! [`Controller::handle_event`](crate::Controller::handle_event) one at a time, in delivery order.
//! Nothing in the crate keeps an `Event` after it has been dispatched.

use std::fmt::{Display, Formatter, Result as FmtResult};

pub mod filter;

/// Index of a device slot, in `0..MAX_DEVICES`.
pub type DeviceId = usize;

/// Index of a button on a device, in `0..MAX_BUTTONS`.
pub type ButtonIndex = u32;

/// Named analog axis of a device.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxisKind {
    X,
    Y,
    Z,
    R,
    U,
    V,
    PovX,
    PovY,
}

impl AxisKind {
    /// All axes in index order.
    pub const ALL: [AxisKind; 8] = [
        AxisKind::X,
        AxisKind::Y,
        AxisKind::Z,
        AxisKind::R,
        AxisKind::U,
        AxisKind::V,
        AxisKind::PovX,
        AxisKind::PovY,
    ];

    /// Returns axis with given index or `None` if `idx` is out of range.
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).cloned()
    }

    /// Printable label of the axis.
    pub fn label(self) -> &'static str {
        match self {
            AxisKind::X => "X",
            AxisKind::Y => "Y",
            AxisKind::Z => "Z",
            AxisKind::R => "R",
            AxisKind::U => "U",
            AxisKind::V => "V",
            AxisKind::PovX => "PovX",
            AxisKind::PovY => "PovY",
        }
    }
}

impl Display for AxisKind {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Keyboard keys the visualizer reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Tab,
    Up,
    Down,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
}

impl KeyCode {
    /// Returns the device slot selected by a number key.
    pub fn digit(self) -> Option<DeviceId> {
        match self {
            KeyCode::Num0 => Some(0),
            KeyCode::Num1 => Some(1),
            KeyCode::Num2 => Some(2),
            KeyCode::Num3 => Some(3),
            KeyCode::Num4 => Some(4),
            KeyCode::Num5 => Some(5),
            KeyCode::Num6 => Some(6),
            KeyCode::Num7 => Some(7),
            _ => None,
        }
    }
}

/// Event delivered by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    /// Window was closed.
    Closed,
    /// Window was resized to `size` (width, height) pixels.
    Resized { size: (u32, u32) },
    KeyPressed { code: KeyCode },
    JoystickConnected { joystick_id: DeviceId },
    JoystickDisconnected { joystick_id: DeviceId },
    /// Axis moved. `position` is in range [-100.0, 100.0].
    JoystickMoved {
        joystick_id: DeviceId,
        axis: AxisKind,
        position: f32,
    },
    JoystickButtonPressed {
        joystick_id: DeviceId,
        button: ButtonIndex,
    },
    JoystickButtonReleased {
        joystick_id: DeviceId,
        button: ButtonIndex,
    },
}

impl Event {
    /// Returns id of the device that generated this event, if any.
    pub fn joystick_id(&self) -> Option<DeviceId> {
        match *self {
            Event::JoystickConnected { joystick_id }
            | Event::JoystickDisconnected { joystick_id }
            | Event::JoystickMoved { joystick_id, .. }
            | Event::JoystickButtonPressed { joystick_id, .. }
            | Event::JoystickButtonReleased { joystick_id, .. } => Some(joystick_id),
            _ => None,
        }
    }
}
