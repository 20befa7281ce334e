// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! `Surface` backed by egui painter.

use eframe::egui;
use eframe::egui::{Align2, Color32, FontData, FontDefinitions, FontFamily, FontId, Pos2, Stroke};
use padview::surface::{Color, Origin, Rect, Shape, Surface, Transform, Vec2};
use padview::Font;

/// Makes `font` available under its own name, with egui's proportional fonts as fallback.
pub fn install_font(ctx: &egui::Context, font: &Font) {
    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(
        font.name().to_owned(),
        FontData::from_owned(font.data().to_vec()).into(),
    );

    let mut family = vec![font.name().to_owned()];
    family.extend(
        fonts
            .families
            .get(&FontFamily::Proportional)
            .cloned()
            .unwrap_or_default(),
    );
    fonts
        .families
        .insert(FontFamily::Name(font.name().into()), family);

    ctx.set_fonts(fonts);
}

pub struct EguiSurface {
    painter: egui::Painter,
    origin: Pos2,
}

impl EguiSurface {
    /// Canvas point (0, 0) is placed at `origin`.
    pub fn new(painter: egui::Painter, origin: Pos2) -> Self {
        EguiSurface { painter, origin }
    }

    fn pos(&self, point: Vec2, transform: &Transform) -> Pos2 {
        let p = transform.transform_point(point);
        self.origin + egui::vec2(p.x, p.y)
    }
}

impl Surface for EguiSurface {
    fn clear(&mut self, color: Color) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, color32(color));
    }

    // egui presents when the frame ends.
    fn present(&mut self) {}

    fn set_viewport(&mut self, rect: Rect) {
        let min = self.origin + egui::vec2(rect.position.x, rect.position.y);
        self.painter.set_clip_rect(egui::Rect::from_min_size(
            min,
            egui::vec2(rect.size.x, rect.size.y),
        ));
    }

    fn draw(&mut self, shape: &Shape, transform: &Transform) {
        match *shape {
            Shape::Rectangle {
                center,
                size,
                fill,
                outline,
                outline_thickness,
            } => {
                let rect = egui::Rect::from_center_size(
                    self.pos(center, transform),
                    egui::vec2(size.x, size.y),
                );
                if fill.a > 0 {
                    self.painter.rect_filled(rect, 0.0, color32(fill));
                }
                if outline.a > 0 && outline_thickness > 0.0 {
                    self.painter
                        .rect_stroke(rect, 0.0, Stroke::new(outline_thickness, color32(outline)));
                }
            }
            Shape::Circle {
                center,
                radius,
                fill,
                outline,
                outline_thickness,
            } => {
                let center = self.pos(center, transform);
                if fill.a > 0 {
                    self.painter.circle_filled(center, radius, color32(fill));
                }
                if outline.a > 0 && outline_thickness > 0.0 {
                    self.painter.circle_stroke(
                        center,
                        radius,
                        Stroke::new(outline_thickness, color32(outline)),
                    );
                }
            }
            Shape::Text {
                font,
                ref string,
                character_size,
                position,
                origin,
                color,
            } => {
                let anchor = match origin {
                    Origin::TopLeft => Align2::LEFT_TOP,
                    Origin::TopCenter => Align2::CENTER_TOP,
                    Origin::Center => Align2::CENTER_CENTER,
                };
                self.painter.text(
                    self.pos(position, transform),
                    anchor,
                    string,
                    FontId::new(character_size as f32, FontFamily::Name(font.name().into())),
                    color32(color),
                );
            }
        }
    }
}

fn color32(c: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}
