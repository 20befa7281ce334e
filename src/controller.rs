// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::constants::*;
use crate::device::DeviceQuery;
use crate::error::Error;
use crate::ev::filter::{Filter, Jitter};
use crate::ev::{DeviceId, Event, KeyCode};
use crate::layout::{GamepadLayout, GenericLayout, Layout};
use crate::selector::DeviceSelector;
use crate::surface::{Color, Font, Origin, Shape, Surface, Transform, Vec2};

/// Which layout is shown for the selected device.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Gamepad,
    Generic,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Gamepad => Mode::Generic,
            Mode::Generic => Mode::Gamepad,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Gamepad
    }
}

/// Initial settings of a [`Controller`].
///
/// ```
/// use padview::{ControllerBuilder, DeviceQuery, Font, Identification, Mode};
///
/// struct NoDevices;
///
/// impl DeviceQuery for NoDevices {
///     fn is_connected(&self, _id: usize) -> bool {
///         false
///     }
///
///     fn identification(&self, _id: usize) -> Identification {
///         Identification::unknown()
///     }
/// }
///
/// let font = Font::from_bytes("font", vec![0, 1, 0, 0]).unwrap();
/// let controller = ControllerBuilder::new()
///     .set_device(2)
///     .set_mode(Mode::Generic)
///     .build(&font, &NoDevices)
///     .unwrap();
///
/// assert_eq!(controller.device_index(), 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControllerBuilder {
    device: DeviceId,
    mode: Mode,
    threshold: f32,
}

impl ControllerBuilder {
    /// Creates builder with device 0 selected, gamepad layout and default threshold.
    pub fn new() -> Self {
        ControllerBuilder {
            device: 0,
            mode: Mode::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn set_device(mut self, device: DeviceId) -> Self {
        self.device = device;
        self
    }

    pub fn set_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Minimal change of axis position that is shown.
    pub fn set_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn build<'f, D: DeviceQuery + ?Sized>(
        self,
        font: &'f Font,
        devices: &D,
    ) -> Result<Controller<'f>, Error> {
        if self.device >= MAX_DEVICES {
            return Err(Error::InvalidDevice(self.device));
        }

        if !(MIN_THRESHOLD..=MAX_THRESHOLD).contains(&self.threshold) {
            return Err(Error::InvalidThreshold(self.threshold));
        }

        Ok(Controller::from_settings(self, font, devices))
    }
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Ties together device selection, layouts and event dispatch.
///
/// There should be one controller per window. It borrows the font for its whole life, so the
/// font has to be loaded first.
#[derive(Debug)]
pub struct Controller<'f> {
    font: &'f Font,
    device_index: DeviceId,
    mode: Mode,
    generic: GenericLayout<'f>,
    gamepad: GamepadLayout<'f>,
    selector: DeviceSelector<'f>,
    jitter: Jitter,
}

impl<'f> Controller<'f> {
    /// Creates controller with default settings.
    pub fn new<D: DeviceQuery + ?Sized>(font: &'f Font, devices: &D) -> Self {
        Controller::from_settings(ControllerBuilder::new(), font, devices)
    }

    fn from_settings<D: DeviceQuery + ?Sized>(
        settings: ControllerBuilder,
        font: &'f Font,
        devices: &D,
    ) -> Self {
        let device = settings.device;
        let ident = devices.identification(device);
        let mut controller = Controller {
            font,
            device_index: device,
            mode: settings.mode,
            generic: GenericLayout::new(font, device, &ident),
            gamepad: GamepadLayout::new(font, device, &ident),
            selector: DeviceSelector::new(font),
            jitter: Jitter::with_threshold(settings.threshold),
        };
        controller.place_layouts();
        controller.refresh_connections(devices);

        controller
    }

    pub fn device_index(&self) -> DeviceId {
        self.device_index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn threshold(&self) -> f32 {
        self.jitter.threshold
    }

    pub fn selector(&self) -> &DeviceSelector<'f> {
        &self.selector
    }

    pub fn generic_layout(&self) -> &GenericLayout<'f> {
        &self.generic
    }

    pub fn gamepad_layout(&self) -> &GamepadLayout<'f> {
        &self.gamepad
    }

    /// Layout drawn in current mode.
    pub fn active_layout(&self) -> &dyn Layout {
        match self.mode {
            Mode::Gamepad => &self.gamepad,
            Mode::Generic => &self.generic,
        }
    }

    fn place_layouts(&mut self) {
        let offset = Vec2::new(0.0, DISPLAY_OFFSET_Y);
        self.generic.reposition(offset);
        self.gamepad.reposition(offset);
    }

    /// Shows device `id`. Both layouts are recreated, so all widgets go back to their defaults.
    pub fn select_device<D: DeviceQuery + ?Sized>(&mut self, id: DeviceId, devices: &D) {
        if id >= MAX_DEVICES {
            warn!("Ignoring selection of joystick {}, only {} slots", id, MAX_DEVICES);
            return;
        }

        let ident = devices.identification(id);
        info!("Selected joystick {} ({})", id, ident.name);

        self.device_index = id;
        self.generic = GenericLayout::new(self.font, id, &ident);
        self.gamepad = GamepadLayout::new(self.font, id, &ident);
        self.place_layouts();
        self.selector.select(id);
        self.jitter.reset(id);
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        debug!("Switched to {:?} layout", self.mode);
    }

    /// Updates connection status of all slots. Layouts are left untouched.
    pub fn refresh_connections<D: DeviceQuery + ?Sized>(&mut self, devices: &D) {
        self.selector.refresh(devices);
        self.selector.select(self.device_index);
    }

    pub fn handle_event<D: DeviceQuery + ?Sized>(&mut self, event: &Event, devices: &D) {
        match *event {
            Event::JoystickConnected { joystick_id } => {
                info!("Joystick {} connected", joystick_id);
                self.refresh_connections(devices);
            }
            Event::JoystickDisconnected { joystick_id } => {
                info!("Joystick {} disconnected", joystick_id);
                self.jitter.reset(joystick_id);
                self.refresh_connections(devices);
            }
            Event::KeyPressed { code } => self.handle_key(code, devices),
            Event::JoystickMoved { .. } => {
                if let Some(ev) = event.filter_ev(&mut self.jitter) {
                    self.dispatch(&ev);
                }
            }
            Event::JoystickButtonPressed { .. } | Event::JoystickButtonReleased { .. } => {
                self.dispatch(event)
            }
            Event::Closed | Event::Resized { .. } => (),
        }
    }

    fn handle_key<D: DeviceQuery + ?Sized>(&mut self, code: KeyCode, devices: &D) {
        if let Some(id) = code.digit() {
            self.select_device(id, devices);
            self.refresh_connections(devices);
            return;
        }

        match code {
            KeyCode::Tab => self.toggle_mode(),
            KeyCode::Up => self.adjust_threshold(THRESHOLD_STEP),
            KeyCode::Down => self.adjust_threshold(-THRESHOLD_STEP),
            _ => (),
        }
    }

    fn adjust_threshold(&mut self, delta: f32) {
        self.jitter.adjust(delta);
        debug!("Movement threshold set to {:.2}", self.jitter.threshold);
    }

    fn dispatch(&mut self, event: &Event) {
        self.gamepad.handle_event(event);
        self.generic.handle_event(event);
    }

    pub fn instructions(&self) -> String {
        format!(
            "Select joystick: 0-{}   Switch layout: Tab   Threshold: {:.2} (Up/Down)   Quit: Esc",
            MAX_DEVICES - 1,
            self.jitter.threshold
        )
    }

    /// Draws instructions, selector strip and either the active layout or a notice that the
    /// selected device is not connected.
    pub fn render(&self, surface: &mut dyn Surface) {
        let transform = Transform::IDENTITY;

        surface.draw(
            &Shape::Text {
                font: self.font,
                string: self.instructions(),
                character_size: LABEL_CHAR_SIZE,
                position: Vec2::new(5.0, 5.0),
                origin: Origin::TopLeft,
                color: Color::WHITE,
            },
            &transform,
        );

        self.selector.draw(surface, &transform);

        if self.selector.status(self.device_index).is_connected() {
            self.active_layout().draw(surface, &transform);
        } else {
            surface.draw(
                &Shape::Text {
                    font: self.font,
                    string: NOT_CONNECTED_TEXT.to_owned(),
                    character_size: HEADER_CHAR_SIZE,
                    position: Vec2::new(DISPLAY_W / 2.0, DISPLAY_OFFSET_Y + DISPLAY_H / 2.0),
                    origin: Origin::Center,
                    color: Color::WHITE,
                },
                &transform,
            );
        }
    }
}
