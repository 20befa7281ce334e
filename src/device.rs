// Copyright 2024 padview Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Query interface of the input subsystem.

use crate::ev::DeviceId;

use uuid::Uuid;

/// Connection status of a device slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn is_connected(self) -> bool {
        self == ConnectionStatus::Connected
    }
}

impl From<bool> for ConnectionStatus {
    fn from(connected: bool) -> Self {
        if connected {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }
}

/// Information identifying a device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identification {
    pub name: String,
    pub uuid: Uuid,
    pub vendor_id: Option<u16>,
    pub product_id: Option<u16>,
}

impl Identification {
    /// Identification with only a name.
    pub fn named<S: Into<String>>(name: S) -> Self {
        Identification {
            name: name.into(),
            uuid: Uuid::nil(),
            vendor_id: None,
            product_id: None,
        }
    }

    /// Identification of a slot without device.
    pub fn unknown() -> Self {
        Identification::named("")
    }

    /// Vendor and product ids as `vvvv:pppp`, followed by the uuid. `None` if neither is known.
    pub fn details(&self) -> Option<String> {
        let ids = match (self.vendor_id, self.product_id) {
            (Some(vendor), Some(product)) => Some(format!("{:04x}:{:04x}", vendor, product)),
            _ => None,
        };
        let uuid = if self.uuid.is_nil() {
            None
        } else {
            Some(self.uuid.to_string())
        };

        match (ids, uuid) {
            (Some(ids), Some(uuid)) => Some(format!("{}  {}", ids, uuid)),
            (ids, uuid) => ids.or(uuid),
        }
    }
}

impl Default for Identification {
    fn default() -> Self {
        Identification::unknown()
    }
}

/// Answers questions about devices known to the input subsystem.
///
/// Implementations must present a consistent snapshot for the duration of a single call.
pub trait DeviceQuery {
    fn is_connected(&self, id: DeviceId) -> bool;

    /// Returns identification of device `id`. For empty slots an `Identification` with empty name
    /// is returned.
    fn identification(&self, id: DeviceId) -> Identification;
}

impl<'a, T: DeviceQuery + ?Sized> DeviceQuery for &'a T {
    fn is_connected(&self, id: DeviceId) -> bool {
        (**self).is_connected(id)
    }

    fn identification(&self, id: DeviceId) -> Identification {
        (**self).identification(id)
    }
}
