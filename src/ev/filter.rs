// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Alter events before they reach the layouts.
//!
//! A filter takes `Option<Event>` and returns `Option<Event>`; `None` on the way out means the
//! event was dropped. Import `Filter` and call `filter_ev()` on an `Event` or `Option<Event>` to
//! chain filters.
//!
//! # Example
//!
//! ```
//! use padview::ev::filter::{Filter, Jitter};
//! use padview::{AxisKind, Event};
//!
//! let mut jitter = Jitter::new();
//! jitter.threshold = 5.0;
//!
//! let moved = |position| Event::JoystickMoved { joystick_id: 0, axis: AxisKind::X, position };
//!
//! assert!(moved(50.0).filter_ev(&mut jitter).is_some());
//! assert!(moved(52.0).filter_ev(&mut jitter).is_none());
//! assert!(moved(60.0).filter_ev(&mut jitter).is_some());
//! ```

use super::{AxisKind, DeviceId, Event};
use crate::constants::{DEFAULT_THRESHOLD, MAX_THRESHOLD, MIN_THRESHOLD};

use fnv::FnvHashMap;

/// Discard axis events that moved less than `threshold` since the last forwarded position of the
/// same axis.
#[derive(Clone, Debug)]
pub struct Jitter {
    pub threshold: f32,
    last: FnvHashMap<(DeviceId, AxisKind), f32>,
}

impl Jitter {
    /// Creates new `Jitter` filter with threshold set to 0.1.
    pub fn new() -> Self {
        Jitter::with_threshold(DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Jitter {
            threshold,
            last: FnvHashMap::default(),
        }
    }

    /// Changes threshold by `delta`, keeping it in `MIN_THRESHOLD..=MAX_THRESHOLD`.
    pub fn adjust(&mut self, delta: f32) {
        self.threshold = (self.threshold + delta).clamp(MIN_THRESHOLD, MAX_THRESHOLD);
    }

    /// Forgets remembered positions of device `id`.
    pub fn reset(&mut self, id: DeviceId) {
        self.last.retain(|&(dev, _), _| dev != id);
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Jitter::new()
    }
}

impl FilterFn for Jitter {
    fn filter(&mut self, ev: Option<Event>) -> Option<Event> {
        match ev {
            Some(Event::JoystickMoved {
                joystick_id,
                axis,
                position,
            }) => match self.last.get(&(joystick_id, axis)) {
                Some(last) if (position - last).abs() < self.threshold => {
                    trace!(
                        "Dropping {} move of joystick {} ({} -> {})",
                        axis,
                        joystick_id,
                        last,
                        position
                    );
                    None
                }
                _ => {
                    self.last.insert((joystick_id, axis), position);
                    ev
                }
            },
            _ => ev,
        }
    }
}

/// Allow filtering events.
///
/// See module level documentation for more info.
pub trait Filter {
    fn filter_ev<F: FilterFn>(self, filter: &mut F) -> Option<Event>;
}

/// Actual filter implementation.
///
/// See module level documentation for more info.
pub trait FilterFn {
    fn filter(&mut self, ev: Option<Event>) -> Option<Event>;
}

impl Filter for Option<Event> {
    fn filter_ev<F: FilterFn>(self, filter: &mut F) -> Option<Event> {
        match self {
            Some(_) => filter.filter(self),
            None => None,
        }
    }
}

impl Filter for Event {
    fn filter_ev<F: FilterFn>(self, filter: &mut F) -> Option<Event> {
        filter.filter(Some(self))
    }
}
