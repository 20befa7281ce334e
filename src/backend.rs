// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Gamepad input through gilrs.
//!
//! gilrs reports axes in range [-1.0, 1.0] with Y pointing up. They are scaled to [-100.0, 100.0]
//! and Y axes are flipped, so that positive values point down like canvas coordinates.
//!
//! Button indices:
//!
//! | gilrs           | index |
//! |-----------------|-------|
//! | `West`          |   0   |
//! | `South`         |   1   |
//! | `East`          |   2   |
//! | `North`         |   3   |
//! | `LeftTrigger`   |   4   |
//! | `RightTrigger`  |   5   |
//! | `LeftTrigger2`  |   6   |
//! | `RightTrigger2` |   7   |
//! | `Select`        |   8   |
//! | `Start`         |   9   |
//! | `LeftThumb`     |  10   |
//! | `RightThumb`    |  11   |
//! | `Mode`          |  12   |
//! | `C`             |  13   |
//! | `Z`             |  14   |
//!
//! D-pad buttons are reported as `PovX`/`PovY` movements and analog triggers as `U`/`V`.

use crate::constants::MAX_DEVICES;
use crate::device::{DeviceQuery, Identification};
use crate::error::Error;
use crate::ev::{AxisKind, ButtonIndex, DeviceId, Event};

use gilrs::{Axis, Button, EventType, Gamepad, Gilrs};
use uuid::Uuid;
use vec_map::VecMap;

/// Devices and events provided by gilrs.
pub struct GilrsDevices {
    gilrs: Gilrs,
    // Indexed by DeviceId
    known: VecMap<Identification>,
}

impl GilrsDevices {
    /// Initializes gilrs. On platforms without gamepad support a backend without any devices is
    /// returned.
    pub fn new() -> Result<Self, Error> {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => gilrs,
            Err(gilrs::Error::NotImplemented(dummy)) => {
                warn!("Gamepads are not supported on this platform");
                dummy
            }
            Err(e) => return Err(Error::InputBackend(e.to_string())),
        };

        let mut known = VecMap::new();
        for (id, gamepad) in gilrs.gamepads() {
            let ident = identify(&gamepad);
            info!("Found joystick {}: {} ({})", id, ident.name, ident.uuid);
            known.insert(usize::from(id), ident);
        }

        Ok(GilrsDevices { gilrs, known })
    }

    /// Returns next pending event, translated for the visualizer. Events that have no meaning for
    /// the visualizer are skipped.
    pub fn next_event(&mut self) -> Option<Event> {
        while let Some(ev) = self.gilrs.next_event() {
            let id = usize::from(ev.id);
            if id >= MAX_DEVICES {
                trace!("Dropping event from joystick {}: {:?}", id, ev.event);
                continue;
            }

            match ev.event {
                EventType::Connected => {
                    let ident = identify(&self.gilrs.gamepad(ev.id));
                    info!("Joystick {} connected: {} ({})", id, ident.name, ident.uuid);
                    self.known.insert(id, ident);
                    return Some(Event::JoystickConnected { joystick_id: id });
                }
                EventType::Disconnected => {
                    return Some(Event::JoystickDisconnected { joystick_id: id });
                }
                event => {
                    if let Some(event) = translate(id, event) {
                        return Some(event);
                    }
                }
            }
        }

        None
    }
}

impl DeviceQuery for GilrsDevices {
    fn is_connected(&self, id: DeviceId) -> bool {
        self.gilrs.gamepads().any(|(gid, _)| usize::from(gid) == id)
    }

    fn identification(&self, id: DeviceId) -> Identification {
        if self.is_connected(id) {
            self.known.get(id).cloned().unwrap_or_default()
        } else {
            Identification::unknown()
        }
    }
}

fn identify(gamepad: &Gamepad) -> Identification {
    Identification {
        name: gamepad.name().to_owned(),
        uuid: Uuid::from_bytes(gamepad.uuid()),
        vendor_id: gamepad.vendor_id(),
        product_id: gamepad.product_id(),
    }
}

/// Translates gilrs event of device `id`. Hot-plug events are handled by `GilrsDevices`.
pub fn translate(id: DeviceId, event: EventType) -> Option<Event> {
    match event {
        EventType::AxisChanged(axis, value, _) => {
            translate_axis(axis, value).map(|(axis, position)| Event::JoystickMoved {
                joystick_id: id,
                axis,
                position,
            })
        }
        EventType::ButtonChanged(button, value, _) => translate_trigger(id, button, value),
        EventType::ButtonPressed(button, _) => translate_button(id, button, true),
        EventType::ButtonReleased(button, _) => translate_button(id, button, false),
        _ => None,
    }
}

/// Maps gilrs axis and its value to visualizer axis and position.
pub fn translate_axis(axis: Axis, value: f32) -> Option<(AxisKind, f32)> {
    let value = value.clamp(-1.0, 1.0) * 100.0;

    let mapped = match axis {
        Axis::LeftStickX => (AxisKind::X, value),
        Axis::LeftStickY => (AxisKind::Y, -value),
        Axis::RightStickX => (AxisKind::Z, value),
        Axis::RightStickY => (AxisKind::R, -value),
        Axis::LeftZ => (AxisKind::U, value),
        Axis::RightZ => (AxisKind::V, value),
        Axis::DPadX => (AxisKind::PovX, value),
        Axis::DPadY => (AxisKind::PovY, -value),
        _ => return None,
    };

    Some(mapped)
}

/// Analog value of `LeftTrigger2`/`RightTrigger2`, in range [0.0, 1.0], as `U`/`V` movement.
pub fn translate_trigger(id: DeviceId, button: Button, value: f32) -> Option<Event> {
    let axis = match button {
        Button::LeftTrigger2 => AxisKind::U,
        Button::RightTrigger2 => AxisKind::V,
        _ => return None,
    };

    Some(Event::JoystickMoved {
        joystick_id: id,
        axis,
        position: value.clamp(0.0, 1.0) * 200.0 - 100.0,
    })
}

pub fn translate_button(id: DeviceId, button: Button, pressed: bool) -> Option<Event> {
    let dpad = match button {
        Button::DPadUp => Some((AxisKind::PovY, -100.0)),
        Button::DPadDown => Some((AxisKind::PovY, 100.0)),
        Button::DPadLeft => Some((AxisKind::PovX, -100.0)),
        Button::DPadRight => Some((AxisKind::PovX, 100.0)),
        _ => None,
    };

    if let Some((axis, position)) = dpad {
        return Some(Event::JoystickMoved {
            joystick_id: id,
            axis,
            position: if pressed { position } else { 0.0 },
        });
    }

    button_index(button).map(|button| {
        if pressed {
            Event::JoystickButtonPressed {
                joystick_id: id,
                button,
            }
        } else {
            Event::JoystickButtonReleased {
                joystick_id: id,
                button,
            }
        }
    })
}

/// Returns index under which `button` is shown.
pub fn button_index(button: Button) -> Option<ButtonIndex> {
    let idx = match button {
        Button::West => 0,
        Button::South => 1,
        Button::East => 2,
        Button::North => 3,
        Button::LeftTrigger => 4,
        Button::RightTrigger => 5,
        Button::LeftTrigger2 => 6,
        Button::RightTrigger2 => 7,
        Button::Select => 8,
        Button::Start => 9,
        Button::LeftThumb => 10,
        Button::RightThumb => 11,
        Button::Mode => 12,
        Button::C => 13,
        Button::Z => 14,
        _ => return None,
    };

    Some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes() {
        assert_eq!(
            translate_axis(Axis::LeftStickX, 0.5),
            Some((AxisKind::X, 50.0))
        );
        assert_eq!(
            translate_axis(Axis::LeftStickY, 1.0),
            Some((AxisKind::Y, -100.0))
        );
        assert_eq!(
            translate_axis(Axis::RightStickX, -0.25),
            Some((AxisKind::Z, -25.0))
        );
        assert_eq!(
            translate_axis(Axis::RightStickY, -0.5),
            Some((AxisKind::R, 50.0))
        );
        assert_eq!(translate_axis(Axis::LeftZ, 1.0), Some((AxisKind::U, 100.0)));
        assert_eq!(translate_axis(Axis::RightZ, 0.0), Some((AxisKind::V, 0.0)));
        assert_eq!(
            translate_axis(Axis::DPadX, 1.0),
            Some((AxisKind::PovX, 100.0))
        );
        assert_eq!(translate_axis(Axis::Unknown, 1.0), None);
    }

    #[test]
    fn axes_are_clamped() {
        assert_eq!(
            translate_axis(Axis::LeftStickX, 3.0),
            Some((AxisKind::X, 100.0))
        );
    }

    #[test]
    fn triggers() {
        assert_eq!(
            translate_trigger(1, Button::RightTrigger2, 0.0),
            Some(Event::JoystickMoved {
                joystick_id: 1,
                axis: AxisKind::V,
                position: -100.0
            })
        );
        assert_eq!(
            translate_trigger(1, Button::LeftTrigger2, 0.5),
            Some(Event::JoystickMoved {
                joystick_id: 1,
                axis: AxisKind::U,
                position: 0.0
            })
        );
        assert_eq!(translate_trigger(1, Button::South, 1.0), None);
    }

    #[test]
    fn dpad_buttons_move_pov() {
        assert_eq!(
            translate_button(0, Button::DPadLeft, true),
            Some(Event::JoystickMoved {
                joystick_id: 0,
                axis: AxisKind::PovX,
                position: -100.0
            })
        );
        assert_eq!(
            translate_button(0, Button::DPadDown, false),
            Some(Event::JoystickMoved {
                joystick_id: 0,
                axis: AxisKind::PovY,
                position: 0.0
            })
        );
    }

    #[test]
    fn buttons() {
        assert_eq!(
            translate_button(2, Button::LeftThumb, true),
            Some(Event::JoystickButtonPressed {
                joystick_id: 2,
                button: 10
            })
        );
        assert_eq!(
            translate_button(2, Button::North, false),
            Some(Event::JoystickButtonReleased {
                joystick_id: 2,
                button: 3
            })
        );
        assert_eq!(translate_button(2, Button::Unknown, true), None);
        assert_eq!(button_index(Button::Mode), Some(12));
    }

    #[test]
    fn hotplug_not_translated() {
        assert_eq!(translate(0, EventType::Connected), None);
        assert_eq!(translate(0, EventType::Disconnected), None);
    }
}
