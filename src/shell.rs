// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! One iteration of the main loop.
//!
//! ```
//! use padview::shell::{run_frame, Flow};
//! # use padview::{Controller, DeviceQuery, Event, Font, Identification, KeyCode};
//! # use padview::surface::{Color, Rect, Shape, Surface, Transform};
//! # struct NoDevices;
//! # impl DeviceQuery for NoDevices {
//! #     fn is_connected(&self, _: usize) -> bool { false }
//! #     fn identification(&self, _: usize) -> Identification { Identification::unknown() }
//! # }
//! # struct Null;
//! # impl Surface for Null {
//! #     fn clear(&mut self, _: Color) {}
//! #     fn present(&mut self) {}
//! #     fn set_viewport(&mut self, _: Rect) {}
//! #     fn draw(&mut self, _: &Shape, _: &Transform) {}
//! # }
//! # let font = Font::from_bytes("font", vec![0, 1, 0, 0]).unwrap();
//! # let devices = NoDevices;
//! # let mut surface = Null;
//! let mut controller = Controller::new(&font, &devices);
//! let mut frames = vec![vec![], vec![Event::KeyPressed { code: KeyCode::Escape }]].into_iter();
//!
//! while let Some(events) = frames.next() {
//!     if run_frame(&mut controller, events, &devices, &mut surface) == Flow::Exit {
//!         break;
//!     }
//! }
//! ```

use crate::controller::Controller;
use crate::device::DeviceQuery;
use crate::ev::{Event, KeyCode};
use crate::surface::{Color, Rect, Surface, Vec2};

/// Whether the main loop should keep running.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Drains `events` into `controller` and draws a frame.
///
/// Window close and the Escape key stop processing immediately and return `Flow::Exit` without
/// drawing. Resize events remap the viewport of `surface`; every other event goes to the
/// controller.
pub fn run_frame<I, D>(
    controller: &mut Controller,
    events: I,
    devices: &D,
    surface: &mut dyn Surface,
) -> Flow
where
    I: IntoIterator<Item = Event>,
    D: DeviceQuery + ?Sized,
{
    for event in events {
        match event {
            Event::Closed
            | Event::KeyPressed {
                code: KeyCode::Escape,
            } => {
                debug!("Exit requested by {:?}", event);
                return Flow::Exit;
            }
            Event::Resized { size: (w, h) } => {
                surface.set_viewport(Rect::new(Vec2::ZERO, Vec2::new(w as f32, h as f32)));
            }
            _ => controller.handle_event(&event, devices),
        }
    }

    surface.clear(Color::BLACK);
    controller.render(surface);
    surface.present();

    Flow::Continue
}
