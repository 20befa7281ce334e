// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::constants::{BUTTON_LAMP_RADIUS, OUTLINE_THICKNESS, WIDGET_CHAR_SIZE};
use crate::ev::ButtonIndex;
use crate::surface::{Color, Font, Origin, Shape, Surface, Transform, Vec2};

/// Circle that lights up while its button is pressed.
#[derive(Clone, Debug)]
pub struct ButtonLamp<'f> {
    font: &'f Font,
    button: ButtonIndex,
    pressed: bool,
    position: Vec2,
}

impl<'f> ButtonLamp<'f> {
    pub fn new(font: &'f Font, button: ButtonIndex) -> Self {
        ButtonLamp {
            font,
            button,
            pressed: false,
            position: Vec2::ZERO,
        }
    }

    pub fn button(&self) -> ButtonIndex {
        self.button
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn fill_color(&self) -> Color {
        if self.pressed {
            Color::WHITE
        } else {
            Color::TRANSPARENT
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, transform: &Transform) {
        surface.draw(
            &Shape::Circle {
                center: self.position,
                radius: BUTTON_LAMP_RADIUS,
                fill: self.fill_color(),
                outline: Color::WHITE,
                outline_thickness: OUTLINE_THICKNESS,
            },
            transform,
        );

        // Dark label stays readable on a lit lamp
        let color = if self.pressed {
            Color::BLACK
        } else {
            Color::WHITE
        };
        surface.draw(
            &Shape::Text {
                font: self.font,
                string: self.button.to_string(),
                character_size: WIDGET_CHAR_SIZE,
                position: self.position,
                origin: Origin::Center,
                color,
            },
            transform,
        );
    }
}
