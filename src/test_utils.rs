// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Fakes shared by unit tests.

use crate::constants::MAX_DEVICES;
use crate::device::{DeviceQuery, Identification};
use crate::ev::DeviceId;
use crate::surface::{Color, Font, Origin, Rect, Shape, Surface, Transform, Vec2};

pub fn test_font() -> Font {
    Font::from_bytes("test", vec![0x00, 0x01, 0x00, 0x00]).unwrap()
}

/// Shape as it ended up on the surface, with transform already applied.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawn {
    Rect {
        center: Vec2,
        size: Vec2,
        fill: Color,
        outline: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
        outline: Color,
    },
    Text {
        string: String,
        character_size: u32,
        position: Vec2,
        origin: Origin,
        color: Color,
    },
}

/// Surface that remembers everything drawn on it.
#[derive(Debug, Default)]
pub struct Recorder {
    pub drawn: Vec<Drawn>,
    pub cleared: usize,
    pub presented: usize,
    pub viewport: Option<Rect>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    pub fn texts(&self) -> Vec<String> {
        self.drawn
            .iter()
            .filter_map(|d| match *d {
                Drawn::Text { ref string, .. } => Some(string.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn text(&self, string: &str) -> Option<&Drawn> {
        self.drawn.iter().find(|d| match **d {
            Drawn::Text { string: ref s, .. } => s == string,
            _ => false,
        })
    }

    pub fn circles(&self) -> Vec<&Drawn> {
        self.drawn
            .iter()
            .filter(|d| match **d {
                Drawn::Circle { .. } => true,
                _ => false,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, _color: Color) {
        self.cleared += 1;
        self.drawn.clear();
    }

    fn present(&mut self) {
        self.presented += 1;
    }

    fn set_viewport(&mut self, rect: Rect) {
        self.viewport = Some(rect);
    }

    fn draw(&mut self, shape: &Shape, transform: &Transform) {
        let drawn = match *shape {
            Shape::Rectangle {
                center,
                size,
                fill,
                outline,
                ..
            } => Drawn::Rect {
                center: transform.transform_point(center),
                size,
                fill,
                outline,
            },
            Shape::Circle {
                center,
                radius,
                fill,
                outline,
                ..
            } => Drawn::Circle {
                center: transform.transform_point(center),
                radius,
                fill,
                outline,
            },
            Shape::Text {
                ref string,
                character_size,
                position,
                origin,
                color,
                ..
            } => Drawn::Text {
                string: string.clone(),
                character_size,
                position: transform.transform_point(position),
                origin,
                color,
            },
        };
        self.drawn.push(drawn);
    }
}

/// In-memory device table.
#[derive(Clone, Debug, Default)]
pub struct FakeDevices {
    pub connected: [bool; MAX_DEVICES],
}

impl FakeDevices {
    pub fn new() -> Self {
        FakeDevices::default()
    }

    pub fn with_connected(ids: &[DeviceId]) -> Self {
        let mut devices = FakeDevices::new();
        for &id in ids {
            devices.connected[id] = true;
        }
        devices
    }
}

impl DeviceQuery for FakeDevices {
    fn is_connected(&self, id: DeviceId) -> bool {
        self.connected.get(id).cloned().unwrap_or(false)
    }

    fn identification(&self, id: DeviceId) -> Identification {
        if self.is_connected(id) {
            Identification::named(format!("Pad {}", id))
        } else {
            Identification::unknown()
        }
    }
}
