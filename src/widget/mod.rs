// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Indicator widgets. Each one displays a single axis, button or stick.
//!
//! Widgets store raw values as received; clamping to [-100, 100] only happens when they are drawn.
//! Positions refer to the visual center of the widget's frame, in canvas coordinates.

mod axis_bar;
mod button_lamp;
mod stick_pad;

pub use self::axis_bar::AxisBar;
pub use self::button_lamp::ButtonLamp;
pub use self::stick_pad::StickPad;

/// Clamps axis value into the displayable range. NaN is shown as a centered axis.
pub(crate) fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-100.0, 100.0)
    }
}
