// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::painter::EguiSurface;

use eframe::egui;
use padview::shell::{self, Flow};
use padview::surface::{Rect, Surface, Vec2};
use padview::{Controller, Event, GilrsDevices, KeyCode};

/// Last known window size and the viewport derived from it.
///
/// Painters are recreated every frame, so the viewport is kept here and applied to each of them.
#[derive(Debug, Default)]
struct Window {
    size: Option<egui::Vec2>,
    viewport: Option<Rect>,
}

impl Window {
    /// Returns `Resized` event if `size` differs from the last one.
    fn update(&mut self, size: egui::Vec2) -> Option<Event> {
        if self.size == Some(size) {
            return None;
        }

        self.size = Some(size);
        self.viewport = Some(Rect::new(Vec2::ZERO, Vec2::new(size.x, size.y)));
        Some(Event::Resized {
            size: (size.x as u32, size.y as u32),
        })
    }

    fn apply(&self, surface: &mut dyn Surface) {
        if let Some(viewport) = self.viewport {
            surface.set_viewport(viewport);
        }
    }
}

pub struct App {
    controller: Controller<'static>,
    devices: GilrsDevices,
    window: Window,
}

impl App {
    pub fn new(controller: Controller<'static>, devices: GilrsDevices) -> Self {
        App {
            controller,
            devices,
            window: Window::default(),
        }
    }

    fn window_events(&mut self, ctx: &egui::Context) -> Vec<Event> {
        let (mut events, size) = ctx.input(|i| {
            let mut events = Vec::new();
            if i.viewport().close_requested() {
                events.push(Event::Closed);
            }
            for ev in &i.events {
                if let egui::Event::Key {
                    key, pressed: true, ..
                } = *ev
                {
                    if let Some(code) = key_code(key) {
                        events.push(Event::KeyPressed { code });
                    }
                }
            }
            (events, i.screen_rect().size())
        });

        events.extend(self.window.update(size));

        events
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = self.window_events(ctx);
        while let Some(event) = self.devices.next_event() {
            events.push(event);
        }

        let flow = egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let mut surface = EguiSurface::new(ui.painter().clone(), rect.min);
                self.window.apply(&mut surface);
                shell::run_frame(&mut self.controller, events, &self.devices, &mut surface)
            })
            .inner;

        if flow == Flow::Exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        ctx.request_repaint();
    }
}

fn key_code(key: egui::Key) -> Option<KeyCode> {
    use egui::Key;

    let code = match key {
        Key::Escape => KeyCode::Escape,
        Key::Tab => KeyCode::Tab,
        Key::ArrowUp => KeyCode::Up,
        Key::ArrowDown => KeyCode::Down,
        Key::Num0 => KeyCode::Num0,
        Key::Num1 => KeyCode::Num1,
        Key::Num2 => KeyCode::Num2,
        Key::Num3 => KeyCode::Num3,
        Key::Num4 => KeyCode::Num4,
        Key::Num5 => KeyCode::Num5,
        Key::Num6 => KeyCode::Num6,
        Key::Num7 => KeyCode::Num7,
        _ => return None,
    };

    Some(code)
}
