// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[macro_use]
extern crate log;

mod app;
mod painter;

use std::env;
use std::process;

use eframe::egui;
use padview::constants::{DISPLAY_H, DISPLAY_OFFSET_Y, DISPLAY_W};
use padview::{Controller, Error, Font, GilrsDevices};

const DEFAULT_FONT: &str = "resources/tuffy.ttf";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_FONT.to_owned());
    let font = Font::from_file(&path)?;
    info!("Loaded font {} from {}", font.name(), path);
    // Every widget borrows the font until the window closes.
    let font: &'static Font = Box::leak(Box::new(font));

    let devices = GilrsDevices::new()?;
    let controller = Controller::new(font, &devices);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Joystick")
            .with_inner_size([DISPLAY_W, DISPLAY_OFFSET_Y + DISPLAY_H]),
        ..Default::default()
    };

    eframe::run_native(
        "Joystick",
        native_options,
        Box::new(move |cc| {
            painter::install_font(&cc.egui_ctx, font);
            Ok(Box::new(app::App::new(controller, devices)))
        }),
    )
    .map_err(|e| Error::Window(e.to_string()))
}
