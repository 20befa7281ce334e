// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use super::clamp_axis;
use crate::constants::{OUTLINE_THICKNESS, STICK_DOT_RADIUS, STICK_RADIUS, WIDGET_CHAR_SIZE};
use crate::ev::{AxisKind, ButtonIndex};
use crate::surface::{Color, Font, Origin, Shape, Surface, Transform, Vec2};

/// Pair of axes shown as a dot inside a circle.
///
/// A stick may have a click button attached. While that button is pressed, the frame is tinted.
/// Raw values of both axes are printed inside the frame, under the label.
#[derive(Clone, Debug)]
pub struct StickPad<'f> {
    font: &'f Font,
    x_axis: AxisKind,
    y_axis: AxisKind,
    click: Option<ButtonIndex>,
    x: f32,
    y: f32,
    pressed: bool,
    position: Vec2,
}

impl<'f> StickPad<'f> {
    pub fn new(
        font: &'f Font,
        x_axis: AxisKind,
        y_axis: AxisKind,
        click: Option<ButtonIndex>,
    ) -> Self {
        debug_assert!(x_axis != y_axis, "stick needs two different axes");

        StickPad {
            font,
            x_axis,
            y_axis,
            click,
            x: 0.0,
            y: 0.0,
            pressed: false,
            position: Vec2::ZERO,
        }
    }

    pub fn x_axis(&self) -> AxisKind {
        self.x_axis
    }

    pub fn y_axis(&self) -> AxisKind {
        self.y_axis
    }

    pub fn click(&self) -> Option<ButtonIndex> {
        self.click
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_x(&mut self, value: f32) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: f32) {
        self.y = value;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Returns `true` if frame is drawn tinted.
    pub fn is_tinted(&self) -> bool {
        self.pressed && self.click.is_some()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Offset of the dot from the frame center.
    pub fn dot_offset(&self) -> Vec2 {
        Vec2::new(
            clamp_axis(self.x) * STICK_RADIUS / 100.0,
            clamp_axis(self.y) * STICK_RADIUS / 100.0,
        )
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.x_axis, self.y_axis)
    }

    /// Raw values of both axes with two decimals.
    pub fn value_text(&self) -> String {
        format!("{:.2}, {:.2}", self.x, self.y)
    }

    pub fn draw(&self, surface: &mut dyn Surface, transform: &Transform) {
        let fill = if self.is_tinted() {
            Color::YELLOW
        } else {
            Color::TRANSPARENT
        };

        surface.draw(
            &Shape::Circle {
                center: self.position,
                radius: STICK_RADIUS,
                fill,
                outline: Color::WHITE,
                outline_thickness: OUTLINE_THICKNESS,
            },
            transform,
        );

        surface.draw(
            &Shape::Circle {
                center: self.position + self.dot_offset(),
                radius: STICK_DOT_RADIUS,
                fill: Color::RED,
                outline: Color::TRANSPARENT,
                outline_thickness: 0.0,
            },
            transform,
        );

        surface.draw(
            &Shape::Text {
                font: self.font,
                string: self.label(),
                character_size: WIDGET_CHAR_SIZE,
                position: self.position,
                origin: Origin::Center,
                color: Color::WHITE,
            },
            transform,
        );

        surface.draw(
            &Shape::Text {
                font: self.font,
                string: self.value_text(),
                character_size: WIDGET_CHAR_SIZE,
                position: Vec2::new(self.position.x, self.position.y + STICK_RADIUS / 2.0),
                origin: Origin::Center,
                color: Color::WHITE,
            },
            transform,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_font, Drawn, Recorder};

    #[test]
    fn dot_offset_scales_with_radius() {
        let font = test_font();
        let mut pad = StickPad::new(&font, AxisKind::X, AxisKind::Y, Some(10));
        pad.set_x(50.0);
        assert_eq!(pad.dot_offset(), Vec2::new(25.0, 0.0));
        pad.set_y(-100.0);
        assert_eq!(pad.dot_offset(), Vec2::new(25.0, -50.0));
        pad.set_x(300.0);
        assert_eq!(pad.dot_offset().x, 50.0);
        assert_eq!(pad.x(), 300.0);
    }

    #[test]
    fn tint_needs_click_button() {
        let font = test_font();
        let mut stick = StickPad::new(&font, AxisKind::X, AxisKind::Y, Some(10));
        let mut dpad = StickPad::new(&font, AxisKind::PovX, AxisKind::PovY, None);

        stick.set_pressed(true);
        dpad.set_pressed(true);
        assert!(stick.is_tinted());
        assert!(!dpad.is_tinted());
        assert_eq!(dpad.click(), None);
    }

    #[test]
    fn draw_frame_dot_and_label() {
        let font = test_font();
        let mut pad = StickPad::new(&font, AxisKind::Z, AxisKind::R, Some(11));
        pad.set_position(Vec2::new(500.0, 350.0));
        pad.set_x(-20.0);
        pad.set_y(40.0);

        let mut surface = Recorder::new();
        pad.draw(&mut surface, &Transform::IDENTITY);

        match surface.drawn[1] {
            Drawn::Circle { center, .. } => assert_eq!(center, Vec2::new(490.0, 370.0)),
            ref other => panic!("expected dot, got {:?}", other),
        }
        assert_eq!(
            surface.texts(),
            vec!["Z/R".to_owned(), "-20.00, 40.00".to_owned()]
        );
        match surface.text("-20.00, 40.00") {
            Some(&Drawn::Text { position, origin, .. }) => {
                assert_eq!(position, Vec2::new(500.0, 350.0 + STICK_RADIUS / 2.0));
                assert_eq!(origin, Origin::Center);
            }
            other => panic!("values not drawn: {:?}", other),
        }
    }
}
