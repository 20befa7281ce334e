// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Row of device slots at the top of the window.

use crate::constants::{DISPLAY_W, LABEL_CHAR_SIZE, MAX_DEVICES, OUTLINE_THICKNESS};
use crate::device::{ConnectionStatus, DeviceQuery};
use crate::ev::DeviceId;
use crate::surface::{Color, Font, Origin, Shape, Surface, Transform, Vec2};

const SLOT_Y: f32 = 40.0;
const MARKER_SIZE: f32 = 24.0;

/// One entry of the selector strip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub id: DeviceId,
    pub status: ConnectionStatus,
}

impl Slot {
    pub fn color(&self) -> Color {
        match self.status {
            ConnectionStatus::Connected => Color::GREEN,
            ConnectionStatus::Disconnected => Color::RED,
        }
    }
}

/// Shows which device slots are connected and which one is selected.
#[derive(Clone, Debug)]
pub struct DeviceSelector<'f> {
    font: &'f Font,
    slots: Vec<Slot>,
    selected: DeviceId,
}

impl<'f> DeviceSelector<'f> {
    /// Creates strip with all slots disconnected and slot 0 selected.
    pub fn new(font: &'f Font) -> Self {
        DeviceSelector {
            font,
            slots: (0..MAX_DEVICES)
                .map(|id| Slot {
                    id,
                    status: ConnectionStatus::Disconnected,
                })
                .collect(),
            selected: 0,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn selected(&self) -> DeviceId {
        self.selected
    }

    /// Moves selection marker to `id`. Out of range ids are ignored.
    pub fn select(&mut self, id: DeviceId) {
        if id < self.slots.len() {
            self.selected = id;
        }
    }

    pub fn status(&self, id: DeviceId) -> ConnectionStatus {
        self.slots
            .get(id)
            .map(|s| s.status)
            .unwrap_or(ConnectionStatus::Disconnected)
    }

    /// Queries connection status of every slot.
    pub fn refresh<D: DeviceQuery + ?Sized>(&mut self, devices: &D) {
        for slot in &mut self.slots {
            slot.status = devices.is_connected(slot.id).into();
        }
    }

    /// Center of slot `id` on the canvas.
    pub fn slot_position(id: DeviceId) -> Vec2 {
        Vec2::new(
            (id + 1) as f32 * DISPLAY_W / (MAX_DEVICES + 1) as f32,
            SLOT_Y,
        )
    }

    /// Draws selection marker and then all slot labels.
    pub fn draw(&self, surface: &mut dyn Surface, transform: &Transform) {
        surface.draw(
            &Shape::Rectangle {
                center: Self::slot_position(self.selected),
                size: Vec2::new(MARKER_SIZE, MARKER_SIZE),
                fill: Color::TRANSPARENT,
                outline: Color::WHITE,
                outline_thickness: OUTLINE_THICKNESS,
            },
            transform,
        );

        for slot in &self.slots {
            surface.draw(
                &Shape::Text {
                    font: self.font,
                    string: slot.id.to_string(),
                    character_size: LABEL_CHAR_SIZE,
                    position: Self::slot_position(slot.id),
                    origin: Origin::Center,
                    color: slot.color(),
                },
                transform,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_font, Drawn, FakeDevices, Recorder};

    #[test]
    fn refresh_colors_slots() {
        let font = test_font();
        let mut selector = DeviceSelector::new(&font);
        selector.refresh(&FakeDevices::with_connected(&[0, 2]));

        assert_eq!(selector.slots().len(), MAX_DEVICES);
        assert_eq!(selector.slots()[0].color(), Color::GREEN);
        assert_eq!(selector.slots()[1].color(), Color::RED);
        assert_eq!(selector.status(2), ConnectionStatus::Connected);
        assert_eq!(selector.status(100), ConnectionStatus::Disconnected);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let font = test_font();
        let mut selector = DeviceSelector::new(&font);
        selector.select(5);
        assert_eq!(selector.selected(), 5);
        selector.select(MAX_DEVICES);
        assert_eq!(selector.selected(), 5);
    }

    #[test]
    fn marker_drawn_on_selected_slot() {
        let font = test_font();
        let mut selector = DeviceSelector::new(&font);
        selector.select(3);

        let mut surface = Recorder::new();
        selector.draw(&mut surface, &Transform::IDENTITY);

        let markers: Vec<_> = surface
            .drawn
            .iter()
            .filter(|d| match **d {
                Drawn::Rect { .. } => true,
                _ => false,
            })
            .collect();
        assert_eq!(markers.len(), 1);
        match *markers[0] {
            Drawn::Rect { center, .. } => assert_eq!(center, DeviceSelector::slot_position(3)),
            _ => unreachable!(),
        }
        assert_eq!(surface.texts().len(), MAX_DEVICES);
    }
}
