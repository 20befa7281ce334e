// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

/// Number of device slots shown in the selector strip.
pub const MAX_DEVICES: usize = 8;
/// Maximum number of buttons tracked per device.
pub const MAX_BUTTONS: u32 = 32;
/// Maximum number of axes tracked per device.
pub const MAX_AXES: usize = 8;

/// Logical width of the layout canvas.
pub const DISPLAY_W: f32 = 800.0;
/// Logical height of the layout canvas.
pub const DISPLAY_H: f32 = 400.0;
/// Vertical offset of the layout canvas, below the selector strip.
pub const DISPLAY_OFFSET_Y: f32 = 60.0;

/// Width and height of an axis bar frame.
pub const AXIS_BAR_SIZE: (f32, f32) = (20.0, 40.0);
pub const BUTTON_LAMP_RADIUS: f32 = 9.0;
pub const STICK_RADIUS: f32 = 50.0;
pub const STICK_DOT_RADIUS: f32 = 5.0;
pub const OUTLINE_THICKNESS: f32 = 2.0;

pub const HEADER_CHAR_SIZE: u32 = 20;
pub const LABEL_CHAR_SIZE: u32 = 14;
pub const WIDGET_CHAR_SIZE: u32 = 10;

/// Default movement threshold, in axis units.
pub const DEFAULT_THRESHOLD: f32 = 0.1;
pub const MIN_THRESHOLD: f32 = 0.1;
pub const MAX_THRESHOLD: f32 = 100.0;
pub const THRESHOLD_STEP: f32 = 0.1;

/// Text shown instead of a layout when the selected slot is empty.
pub const NOT_CONNECTED_TEXT: &str = "Joystick not connected";
