// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Arrangements of widgets for a single device.
//!
//! Both layouts keep their widgets in a [`Widgets`] set, which owns the event dispatch rules:
//!
//! * Button events go to the first `ButtonLamp` with the same index. If there is none, they go
//!   to the first `StickPad` whose click button has that index. Otherwise they are dropped.
//! * Axis events go to the first `StickPad` that uses the axis (as X or Y). If there is none,
//!   they go to the first `AxisBar` of that axis. Otherwise they are dropped.
//!
//! Events from any device other than the one the layout was built for are ignored.

mod gamepad;
mod generic;

pub use self::gamepad::{GamepadLayout, Placement, WidgetKind, GAMEPAD_TABLE};
pub use self::generic::GenericLayout;

use crate::constants::{HEADER_CHAR_SIZE, LABEL_CHAR_SIZE};
use crate::device::Identification;
use crate::ev::{AxisKind, ButtonIndex, DeviceId, Event};
use crate::surface::{Color, Font, Origin, Shape, Surface, Transform, Vec2};
use crate::widget::{AxisBar, ButtonLamp, StickPad};

/// Common interface of layouts.
pub trait Layout {
    /// Updates widgets according to `event`.
    fn handle_event(&mut self, event: &Event);

    /// Draws all widgets. Layout's own offset is applied on top of `transform`.
    fn draw(&self, surface: &mut dyn Surface, transform: &Transform);

    /// Moves the whole layout so that canvas origin lands at `offset`.
    fn reposition(&mut self, offset: Vec2);
}

/// Ordered widget collections of one layout, bound to one device.
#[derive(Clone, Debug)]
pub struct Widgets<'f> {
    font: &'f Font,
    device: DeviceId,
    header: String,
    details: Option<String>,
    offset: Vec2,
    lamps: Vec<ButtonLamp<'f>>,
    pads: Vec<StickPad<'f>>,
    bars: Vec<AxisBar<'f>>,
}

impl<'f> Widgets<'f> {
    pub(crate) fn new(font: &'f Font, device: DeviceId, ident: &Identification) -> Self {
        Widgets {
            font,
            device,
            header: format!("{}: {}", device, ident.name),
            details: ident.details(),
            offset: Vec2::ZERO,
            lamps: Vec::new(),
            pads: Vec::new(),
            bars: Vec::new(),
        }
    }

    pub(crate) fn push_lamp(&mut self, button: ButtonIndex, position: Vec2) {
        let mut lamp = ButtonLamp::new(self.font, button);
        lamp.set_position(position);
        self.lamps.push(lamp);
    }

    pub(crate) fn push_pad(
        &mut self,
        x_axis: AxisKind,
        y_axis: AxisKind,
        click: Option<ButtonIndex>,
        position: Vec2,
    ) {
        let mut pad = StickPad::new(self.font, x_axis, y_axis, click);
        pad.set_position(position);
        self.pads.push(pad);
    }

    pub(crate) fn push_bar(&mut self, axis: AxisKind, position: Vec2) {
        let mut bar = AxisBar::new(self.font, axis);
        bar.set_position(position);
        self.bars.push(bar);
    }

    pub fn device(&self) -> DeviceId {
        self.device
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Vendor/product ids and uuid line shown under the header, if the device reported any.
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn lamps(&self) -> &[ButtonLamp<'f>] {
        &self.lamps
    }

    pub fn pads(&self) -> &[StickPad<'f>] {
        &self.pads
    }

    pub fn bars(&self) -> &[AxisBar<'f>] {
        &self.bars
    }

    /// Returns first lamp showing `button`.
    pub fn lamp(&self, button: ButtonIndex) -> Option<&ButtonLamp<'f>> {
        self.lamps.iter().find(|l| l.button() == button)
    }

    /// Returns first bar showing `axis`.
    pub fn bar(&self, axis: AxisKind) -> Option<&AxisBar<'f>> {
        self.bars.iter().find(|b| b.axis() == axis)
    }

    /// Returns first stick that uses `axis`.
    pub fn pad(&self, axis: AxisKind) -> Option<&StickPad<'f>> {
        self.pads
            .iter()
            .find(|p| p.x_axis() == axis || p.y_axis() == axis)
    }

    pub fn handle_event(&mut self, event: &Event) {
        match *event {
            Event::JoystickButtonPressed {
                joystick_id,
                button,
            } if joystick_id == self.device => self.set_button(button, true),
            Event::JoystickButtonReleased {
                joystick_id,
                button,
            } if joystick_id == self.device => self.set_button(button, false),
            Event::JoystickMoved {
                joystick_id,
                axis,
                position,
            } if joystick_id == self.device => self.set_axis(axis, position),
            _ => (),
        }
    }

    fn set_button(&mut self, button: ButtonIndex, pressed: bool) {
        if let Some(lamp) = self.lamps.iter_mut().find(|l| l.button() == button) {
            lamp.set_pressed(pressed);
        } else if let Some(pad) = self.pads.iter_mut().find(|p| p.click() == Some(button)) {
            pad.set_pressed(pressed);
        } else {
            trace!("No widget for button {} of joystick {}", button, self.device);
        }
    }

    fn set_axis(&mut self, axis: AxisKind, position: f32) {
        for pad in &mut self.pads {
            if pad.x_axis() == axis {
                pad.set_x(position);
                return;
            } else if pad.y_axis() == axis {
                pad.set_y(position);
                return;
            }
        }

        if let Some(bar) = self.bars.iter_mut().find(|b| b.axis() == axis) {
            bar.set_value(position);
        } else {
            trace!("No widget for axis {} of joystick {}", axis, self.device);
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, transform: &Transform) {
        let transform = transform.translate(self.offset);

        surface.draw(
            &Shape::Text {
                font: self.font,
                string: self.header.clone(),
                character_size: HEADER_CHAR_SIZE,
                position: Vec2::new(5.0, 5.0),
                origin: Origin::TopLeft,
                color: Color::WHITE,
            },
            &transform,
        );

        if let Some(ref details) = self.details {
            surface.draw(
                &Shape::Text {
                    font: self.font,
                    string: details.clone(),
                    character_size: LABEL_CHAR_SIZE,
                    position: Vec2::new(5.0, 30.0),
                    origin: Origin::TopLeft,
                    color: Color::WHITE,
                },
                &transform,
            );
        }

        for pad in &self.pads {
            pad.draw(surface, &transform);
        }
        for bar in &self.bars {
            bar.draw(surface, &transform);
        }
        for lamp in &self.lamps {
            lamp.draw(surface, &transform);
        }
    }

    pub fn reposition(&mut self, offset: Vec2) {
        self.offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_font, Drawn, Recorder};

    fn overlapping(font: &Font) -> Widgets {
        let mut widgets = Widgets::new(font, 0, &Identification::named("Pad"));
        widgets.push_pad(AxisKind::X, AxisKind::Y, Some(4), Vec2::ZERO);
        widgets.push_pad(AxisKind::X, AxisKind::Z, Some(5), Vec2::ZERO);
        widgets.push_lamp(4, Vec2::ZERO);
        widgets.push_lamp(4, Vec2::ZERO);
        widgets.push_bar(AxisKind::Y, Vec2::ZERO);
        widgets.push_bar(AxisKind::U, Vec2::ZERO);
        widgets
    }

    #[test]
    fn lamp_wins_over_stick_click() {
        let font = test_font();
        let mut widgets = overlapping(&font);

        widgets.handle_event(&Event::JoystickButtonPressed {
            joystick_id: 0,
            button: 4,
        });
        assert!(widgets.lamps()[0].is_pressed());
        // First match only
        assert!(!widgets.lamps()[1].is_pressed());
        assert!(!widgets.pads()[0].is_pressed());

        widgets.handle_event(&Event::JoystickButtonPressed {
            joystick_id: 0,
            button: 5,
        });
        assert!(widgets.pads()[1].is_tinted());
    }

    #[test]
    fn stick_wins_over_bar() {
        let font = test_font();
        let mut widgets = overlapping(&font);

        widgets.handle_event(&Event::JoystickMoved {
            joystick_id: 0,
            axis: AxisKind::Y,
            position: 30.0,
        });
        assert_eq!(widgets.pads()[0].y(), 30.0);
        assert_eq!(widgets.bars()[0].value(), 0.0);

        widgets.handle_event(&Event::JoystickMoved {
            joystick_id: 0,
            axis: AxisKind::X,
            position: 70.0,
        });
        assert_eq!(widgets.pads()[0].x(), 70.0);
        assert_eq!(widgets.pads()[1].x(), 0.0);

        widgets.handle_event(&Event::JoystickMoved {
            joystick_id: 0,
            axis: AxisKind::U,
            position: -40.0,
        });
        assert_eq!(widgets.bar(AxisKind::U).map(|b| b.value()), Some(-40.0));
    }

    #[test]
    fn other_devices_ignored() {
        let font = test_font();
        let mut widgets = overlapping(&font);

        widgets.handle_event(&Event::JoystickButtonPressed {
            joystick_id: 1,
            button: 4,
        });
        widgets.handle_event(&Event::JoystickMoved {
            joystick_id: 1,
            axis: AxisKind::X,
            position: 100.0,
        });
        assert!(widgets.lamps().iter().all(|l| !l.is_pressed()));
        assert!(widgets.pads().iter().all(|p| p.x() == 0.0 && !p.is_pressed()));
    }

    #[test]
    fn unknown_elements_dropped() {
        let font = test_font();
        let mut widgets = overlapping(&font);

        widgets.handle_event(&Event::JoystickButtonPressed {
            joystick_id: 0,
            button: 31,
        });
        widgets.handle_event(&Event::JoystickMoved {
            joystick_id: 0,
            axis: AxisKind::PovY,
            position: 100.0,
        });
        assert!(widgets.lamps().iter().all(|l| !l.is_pressed()));
        assert!(widgets.bars().iter().all(|b| b.value() == 0.0));
    }

    #[test]
    fn details_drawn_under_header() {
        let font = test_font();
        let mut ident = Identification::named("Pad");
        ident.vendor_id = Some(0x054c);
        ident.product_id = Some(0x09cc);

        let mut widgets = Widgets::new(&font, 1, &ident);
        widgets.reposition(Vec2::new(0.0, 60.0));
        assert_eq!(widgets.header(), "1: Pad");
        assert_eq!(widgets.details(), Some("054c:09cc"));

        let mut surface = Recorder::new();
        widgets.draw(&mut surface, &Transform::IDENTITY);
        assert_eq!(surface.texts(), vec!["1: Pad".to_owned(), "054c:09cc".to_owned()]);
        match surface.text("054c:09cc") {
            Some(&Drawn::Text { position, .. }) => assert_eq!(position, Vec2::new(5.0, 90.0)),
            other => panic!("details not drawn: {:?}", other),
        }
    }

    #[test]
    fn no_details_without_ids() {
        let font = test_font();
        let widgets = Widgets::new(&font, 0, &Identification::named("Pad"));
        assert_eq!(widgets.details(), None);

        let mut surface = Recorder::new();
        widgets.draw(&mut surface, &Transform::IDENTITY);
        assert_eq!(surface.texts(), vec!["0: Pad".to_owned()]);
    }

}
