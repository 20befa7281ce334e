// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use super::clamp_axis;
use crate::constants::{AXIS_BAR_SIZE, OUTLINE_THICKNESS, WIDGET_CHAR_SIZE};
use crate::ev::AxisKind;
use crate::surface::{Color, Font, Origin, Shape, Surface, Transform, Vec2};

/// Vertical bar filled proportionally to the value of one axis.
///
/// The axis label sits in the middle of the frame and the raw value, with two decimals, under it.
#[derive(Clone, Debug)]
pub struct AxisBar<'f> {
    font: &'f Font,
    axis: AxisKind,
    value: f32,
    position: Vec2,
}

impl<'f> AxisBar<'f> {
    pub fn new(font: &'f Font, axis: AxisKind) -> Self {
        AxisBar {
            font,
            axis,
            value: 0.0,
            position: Vec2::ZERO,
        }
    }

    pub fn axis(&self) -> AxisKind {
        self.axis
    }

    /// Returns last value exactly as it was set.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Part of the bar that is filled, in range [0.0, 1.0].
    pub fn fill_ratio(&self) -> f32 {
        (clamp_axis(self.value) + 100.0) / 200.0
    }

    pub fn draw(&self, surface: &mut dyn Surface, transform: &Transform) {
        let (w, h) = AXIS_BAR_SIZE;
        let fill_h = self.fill_ratio() * h;

        surface.draw(
            &Shape::Rectangle {
                center: self.position,
                size: Vec2::new(w, h),
                fill: Color::TRANSPARENT,
                outline: Color::WHITE,
                outline_thickness: OUTLINE_THICKNESS,
            },
            transform,
        );

        // Grows up from the bottom edge
        surface.draw(
            &Shape::Rectangle {
                center: Vec2::new(self.position.x, self.position.y + (h - fill_h) / 2.0),
                size: Vec2::new(w, fill_h),
                fill: Color::BLUE,
                outline: Color::TRANSPARENT,
                outline_thickness: 0.0,
            },
            transform,
        );

        surface.draw(
            &Shape::Text {
                font: self.font,
                string: self.axis.label().to_owned(),
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
                string: format!("{:.2}", self.value),
                character_size: WIDGET_CHAR_SIZE,
                position: Vec2::new(self.position.x, self.position.y + h / 2.0 + 4.0),
                origin: Origin::TopCenter,
                color: Color::WHITE,
            },
            transform,
        );
    }
}
