// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use super::{Layout, Widgets};
use crate::constants::{DISPLAY_H, DISPLAY_W, MAX_AXES, MAX_BUTTONS};
use crate::device::Identification;
use crate::ev::{AxisKind, DeviceId, Event};
use crate::surface::{Font, Surface, Transform, Vec2};

/// Shows every axis as a bar and every button as a lamp, without assuming anything about the
/// device.
#[derive(Clone, Debug)]
pub struct GenericLayout<'f> {
    widgets: Widgets<'f>,
}

impl<'f> GenericLayout<'f> {
    pub fn new(font: &'f Font, device: DeviceId, ident: &Identification) -> Self {
        let mut widgets = Widgets::new(font, device, ident);

        for i in 0..MAX_AXES {
            if let Some(axis) = AxisKind::from_index(i) {
                let x = (i + 1) as f32 * DISPLAY_W / (MAX_AXES + 1) as f32;
                widgets.push_bar(axis, Vec2::new(x, DISPLAY_H * 0.25));
            }
        }

        // Even and odd buttons form two staggered rows
        for i in 0..MAX_BUTTONS {
            let column = 1 + (i % MAX_BUTTONS) / 2;
            let x = column as f32 * DISPLAY_W / (MAX_BUTTONS / 2 + 1) as f32;
            let y = DISPLAY_H * 0.75 + (i % 2) as f32 * 50.0;
            widgets.push_lamp(i, Vec2::new(x, y));
        }

        GenericLayout { widgets }
    }

    pub fn widgets(&self) -> &Widgets<'f> {
        &self.widgets
    }
}

impl<'f> Layout for GenericLayout<'f> {
    fn handle_event(&mut self, event: &Event) {
        self.widgets.handle_event(event);
    }

    fn draw(&self, surface: &mut dyn Surface, transform: &Transform) {
        self.widgets.draw(surface, transform);
    }

    fn reposition(&mut self, offset: Vec2) {
        self.widgets.reposition(offset);
    }
}
