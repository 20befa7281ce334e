// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Drawing surface interface and the font resource.
//!
//! The visualizer never rasterizes anything itself. Widgets describe what they want drawn with
//! [`Shape`]s and hand them to a [`Surface`] implemented by the host.

use crate::error::Error;

use std::fs;
use std::ops::{Add, Sub};
use std::path::Path;

/// 2D point or offset in canvas units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Rect { position, size }
    }
}

/// RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 128, 255);
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

/// Translation applied to every point of a shape.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Transform {
    offset: Vec2,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { offset: Vec2::ZERO };

    pub fn translation(offset: Vec2) -> Self {
        Transform { offset }
    }

    /// Returns transform translated further by `offset`.
    pub fn translate(self, offset: Vec2) -> Self {
        Transform {
            offset: self.offset + offset,
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        point + self.offset
    }
}

/// Which point of a text block its position refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    TopLeft,
    TopCenter,
    Center,
}

/// Primitive understood by a [`Surface`].
#[derive(Clone, Debug, PartialEq)]
pub enum Shape<'a> {
    /// Axis aligned rectangle; `center` is the middle of the rectangle.
    Rectangle {
        center: Vec2,
        size: Vec2,
        fill: Color,
        outline: Color,
        outline_thickness: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
        outline: Color,
        outline_thickness: f32,
    },
    Text {
        font: &'a Font,
        string: String,
        character_size: u32,
        position: Vec2,
        origin: Origin,
        color: Color,
    },
}

/// Render target provided by the host.
pub trait Surface {
    /// Clears whole target with `color`.
    fn clear(&mut self, color: Color);

    /// Shows what was drawn since the last `clear()`.
    fn present(&mut self);

    /// Maps the canvas to `rect` of the target.
    fn set_viewport(&mut self, rect: Rect);

    fn draw(&mut self, shape: &Shape, transform: &Transform);
}

/// TrueType or OpenType font loaded into memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Font {
    name: String,
    data: Vec<u8>,
}

impl Font {
    /// Loads font from file at `path`. The file stem becomes the font name.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(Error::Io)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "font".to_owned());

        Font::from_bytes(name, data)
    }

    /// Creates font from raw file contents. Fails if `data` is not a TrueType or OpenType file.
    pub fn from_bytes<S: Into<String>>(name: S, data: Vec<u8>) -> Result<Self, Error> {
        if !Self::is_font_data(&data) {
            return Err(Error::InvalidFont);
        }

        Ok(Font {
            name: name.into(),
            data,
        })
    }

    fn is_font_data(data: &[u8]) -> bool {
        match data.get(0..4) {
            Some([0x00, 0x01, 0x00, 0x00]) | Some(b"OTTO") | Some(b"true") | Some(b"ttcf") => true,
            _ => false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("name", &self.name)
            .field("len", &self.data.len())
            .finish()
    }
}
