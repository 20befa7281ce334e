// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use super::{Layout, Widgets};
use crate::constants::{DISPLAY_H as H, DISPLAY_W as W};
use crate::device::Identification;
use crate::ev::{AxisKind, ButtonIndex, DeviceId, Event};
use crate::surface::{Font, Surface, Transform, Vec2};

/// Widget created for one entry of a placement table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WidgetKind {
    Stick {
        x: AxisKind,
        y: AxisKind,
        click: Option<ButtonIndex>,
    },
    Lamp(ButtonIndex),
    Bar(AxisKind),
}

/// Entry of a placement table: what to create and where its center goes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    pub name: &'static str,
    pub kind: WidgetKind,
    pub anchor: Vec2,
}

const FACE: Vec2 = Vec2 {
    x: W / 2.0 + 250.0,
    y: H / 2.0 - 50.0,
};
const LEFT_TRIGGER: Vec2 = Vec2 {
    x: W / 2.0 - 100.0,
    y: H / 5.0,
};
const RIGHT_TRIGGER: Vec2 = Vec2 {
    x: W / 2.0 + 100.0,
    y: H / 5.0,
};

const fn at(x: f32, y: f32) -> Vec2 {
    Vec2 { x, y }
}

/// Widgets of a typical dual-stick gamepad.
///
/// Order within each widget type is the dispatch order.
pub const GAMEPAD_TABLE: [Placement; 16] = [
    Placement {
        name: "left stick",
        kind: WidgetKind::Stick {
            x: AxisKind::X,
            y: AxisKind::Y,
            click: Some(10),
        },
        anchor: at(W / 2.0 - 100.0, H - 50.0),
    },
    Placement {
        name: "right stick",
        kind: WidgetKind::Stick {
            x: AxisKind::Z,
            y: AxisKind::R,
            click: Some(11),
        },
        anchor: at(W / 2.0 + 100.0, H - 50.0),
    },
    Placement {
        name: "dpad",
        kind: WidgetKind::Stick {
            x: AxisKind::PovX,
            y: AxisKind::PovY,
            click: None,
        },
        anchor: at(W / 2.0 - 250.0, H / 2.0 - 50.0),
    },
    Placement {
        name: "face north",
        kind: WidgetKind::Lamp(3),
        anchor: at(FACE.x, FACE.y - 20.0),
    },
    Placement {
        name: "face south",
        kind: WidgetKind::Lamp(1),
        anchor: at(FACE.x, FACE.y + 20.0),
    },
    Placement {
        name: "face east",
        kind: WidgetKind::Lamp(2),
        anchor: at(FACE.x + 20.0, FACE.y),
    },
    Placement {
        name: "face west",
        kind: WidgetKind::Lamp(0),
        anchor: at(FACE.x - 20.0, FACE.y),
    },
    Placement {
        name: "right trigger",
        kind: WidgetKind::Bar(AxisKind::V),
        anchor: RIGHT_TRIGGER,
    },
    Placement {
        name: "left trigger",
        kind: WidgetKind::Bar(AxisKind::U),
        anchor: LEFT_TRIGGER,
    },
    Placement {
        name: "right trigger button",
        kind: WidgetKind::Lamp(7),
        anchor: at(RIGHT_TRIGGER.x, RIGHT_TRIGGER.y - 30.0),
    },
    Placement {
        name: "left trigger button",
        kind: WidgetKind::Lamp(6),
        anchor: at(LEFT_TRIGGER.x, LEFT_TRIGGER.y - 30.0),
    },
    Placement {
        name: "left shoulder",
        kind: WidgetKind::Lamp(5),
        anchor: at(W / 2.0 + 100.0, H / 5.0 + 80.0),
    },
    Placement {
        name: "right shoulder",
        kind: WidgetKind::Lamp(4),
        anchor: at(W / 2.0 - 100.0, H / 5.0 + 80.0),
    },
    Placement {
        name: "back",
        kind: WidgetKind::Lamp(8),
        anchor: at(W / 2.0 - 20.0, H / 2.0),
    },
    Placement {
        name: "start",
        kind: WidgetKind::Lamp(9),
        anchor: at(W / 2.0 + 20.0, H / 2.0),
    },
    Placement {
        name: "guide",
        kind: WidgetKind::Lamp(12),
        anchor: at(W / 2.0, H / 2.0 + 30.0),
    },
];

/// Layout resembling a dual-stick gamepad.
#[derive(Clone, Debug)]
pub struct GamepadLayout<'f> {
    widgets: Widgets<'f>,
}

impl<'f> GamepadLayout<'f> {
    pub fn new(font: &'f Font, device: DeviceId, ident: &Identification) -> Self {
        Self::from_table(font, device, ident, &GAMEPAD_TABLE)
    }

    /// Creates layout with widgets described by `table`.
    pub fn from_table(
        font: &'f Font,
        device: DeviceId,
        ident: &Identification,
        table: &[Placement],
    ) -> Self {
        let mut widgets = Widgets::new(font, device, ident);

        for placement in table {
            match placement.kind {
                WidgetKind::Stick { x, y, click } => {
                    widgets.push_pad(x, y, click, placement.anchor)
                }
                WidgetKind::Lamp(button) => widgets.push_lamp(button, placement.anchor),
                WidgetKind::Bar(axis) => widgets.push_bar(axis, placement.anchor),
            }
        }

        GamepadLayout { widgets }
    }

    pub fn widgets(&self) -> &Widgets<'f> {
        &self.widgets
    }
}

impl<'f> Layout for GamepadLayout<'f> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_font;

    fn lamp_at(layout: &GamepadLayout, button: ButtonIndex) -> Vec2 {
        layout.widgets().lamp(button).unwrap().position()
    }

    #[test]
    fn anchors() {
        let font = test_font();
        let layout = GamepadLayout::new(&font, 0, &Identification::named("Pad"));
        let w = layout.widgets();

        assert_eq!(w.pads().len(), 3);
        assert_eq!(w.lamps().len(), 11);
        assert_eq!(w.bars().len(), 2);

        let left = w.pad(AxisKind::X).unwrap();
        assert_eq!(left.position(), Vec2::new(300.0, 350.0));
        assert_eq!(left.y_axis(), AxisKind::Y);
        assert_eq!(left.click(), Some(10));
        let right = w.pad(AxisKind::Z).unwrap();
        assert_eq!(right.position(), Vec2::new(500.0, 350.0));
        assert_eq!(right.click(), Some(11));
        let dpad = w.pad(AxisKind::PovX).unwrap();
        assert_eq!(dpad.position(), Vec2::new(150.0, 150.0));
        assert_eq!(dpad.click(), None);

        assert_eq!(lamp_at(&layout, 3), Vec2::new(650.0, 130.0));
        assert_eq!(lamp_at(&layout, 1), Vec2::new(650.0, 170.0));
        assert_eq!(lamp_at(&layout, 2), Vec2::new(670.0, 150.0));
        assert_eq!(lamp_at(&layout, 0), Vec2::new(630.0, 150.0));

        assert_eq!(w.bar(AxisKind::V).unwrap().position(), Vec2::new(500.0, 80.0));
        assert_eq!(w.bar(AxisKind::U).unwrap().position(), Vec2::new(300.0, 80.0));
        assert_eq!(lamp_at(&layout, 7), Vec2::new(500.0, 50.0));
        assert_eq!(lamp_at(&layout, 6), Vec2::new(300.0, 50.0));
        assert_eq!(lamp_at(&layout, 5), Vec2::new(500.0, 160.0));
        assert_eq!(lamp_at(&layout, 4), Vec2::new(300.0, 160.0));
        assert_eq!(lamp_at(&layout, 8), Vec2::new(380.0, 200.0));
        assert_eq!(lamp_at(&layout, 9), Vec2::new(420.0, 200.0));
        assert_eq!(lamp_at(&layout, 12), Vec2::new(400.0, 230.0));
    }

    #[test]
    fn sticks_use_distinct_axes() {
        for placement in GAMEPAD_TABLE.iter() {
            if let WidgetKind::Stick { x, y, .. } = placement.kind {
                assert!(x != y, "{} uses one axis twice", placement.name);
            }
        }
    }

    #[test]
    fn left_stick_moves_only_left_stick() {
        let font = test_font();
        let mut layout = GamepadLayout::new(&font, 0, &Identification::named("Pad"));

        layout.handle_event(&Event::JoystickMoved {
            joystick_id: 0,
            axis: AxisKind::X,
            position: 50.0,
        });

        let w = layout.widgets();
        assert_eq!(w.pad(AxisKind::X).unwrap().dot_offset(), Vec2::new(25.0, 0.0));
        assert_eq!(w.pad(AxisKind::Z).unwrap().dot_offset(), Vec2::ZERO);
        assert_eq!(w.pad(AxisKind::PovX).unwrap().dot_offset(), Vec2::ZERO);
        assert!(w.bars().iter().all(|b| b.value() == 0.0));
        assert!(w.lamps().iter().all(|l| !l.is_pressed()));
    }

    #[test]
    fn trigger_bar_fill() {
        let font = test_font();
        let mut layout = GamepadLayout::new(&font, 0, &Identification::named("Pad"));
        let moved = |position| Event::JoystickMoved {
            joystick_id: 0,
            axis: AxisKind::V,
            position,
        };

        layout.handle_event(&moved(-100.0));
        assert_eq!(layout.widgets().bar(AxisKind::V).unwrap().fill_ratio(), 0.0);
        layout.handle_event(&moved(0.0));
        assert_eq!(layout.widgets().bar(AxisKind::V).unwrap().fill_ratio(), 0.5);
        assert_eq!(layout.widgets().bar(AxisKind::U).unwrap().value(), 0.0);
    }

    #[test]
    fn stick_click_tints_stick() {
        let font = test_font();
        let mut layout = GamepadLayout::new(&font, 0, &Identification::named("Pad"));

        layout.handle_event(&Event::JoystickButtonPressed {
            joystick_id: 0,
            button: 10,
        });
        assert!(layout.widgets().pad(AxisKind::X).unwrap().is_tinted());
        assert!(layout.widgets().lamps().iter().all(|l| !l.is_pressed()));

        layout.handle_event(&Event::JoystickButtonReleased {
            joystick_id: 0,
            button: 10,
        });
        assert!(!layout.widgets().pad(AxisKind::X).unwrap().is_tinted());
    }

    #[test]
    fn custom_table() {
        let font = test_font();
        let table = [Placement {
            name: "only",
            kind: WidgetKind::Lamp(10),
            anchor: Vec2::new(1.0, 2.0),
        }];
        let ident = Identification::named("Pad");
        let mut layout = GamepadLayout::from_table(&font, 0, &ident, &table);
        layout.handle_event(&Event::JoystickButtonPressed {
            joystick_id: 0,
            button: 10,
        });
        assert!(layout.widgets().lamp(10).unwrap().is_pressed());
    }
}
