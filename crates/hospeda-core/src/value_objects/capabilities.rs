//! Capability bitflags for staff access control
//!
//! Each staff role maps to a fixed capability set; handlers check the
//! capability they need rather than comparing role names.

use bitflags::bitflags;
use serde::{Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Console capability flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// Browse rooms and run availability searches
        const VIEW_ROOMS          = 1 << 0;
        /// Create, edit, delete rooms
        const MANAGE_ROOMS        = 1 << 1;
        /// Create, edit, delete guests
        const MANAGE_GUESTS       = 1 << 2;
        /// Create, edit, delete reservations
        const MANAGE_RESERVATIONS = 1 << 3;
        /// Issue invoices and edit their lines
        const MANAGE_INVOICES     = 1 << 4;
        /// Manage staff accounts
        const MANAGE_USERS        = 1 << 5;

        /// Front desk capabilities
        const RECEPTION = Self::VIEW_ROOMS.bits()
            | Self::MANAGE_GUESTS.bits()
            | Self::MANAGE_RESERVATIONS.bits()
            | Self::MANAGE_INVOICES.bits();

        /// Every capability
        const ALL = Self::RECEPTION.bits()
            | Self::MANAGE_ROOMS.bits()
            | Self::MANAGE_USERS.bits();
    }
}

impl Capabilities {
    /// Check if the set contains a required capability
    #[inline]
    pub fn has(&self, capability: Capabilities) -> bool {
        self.contains(capability)
    }

    /// Check if the set has any of the given capabilities
    #[inline]
    pub fn has_any(&self, capabilities: Capabilities) -> bool {
        self.intersects(capabilities)
    }

    /// Names of the individual capabilities that are set
    pub fn list(&self) -> Vec<&'static str> {
        const NAMES: [(Capabilities, &str); 6] = [
            (Capabilities::VIEW_ROOMS, "VIEW_ROOMS"),
            (Capabilities::MANAGE_ROOMS, "MANAGE_ROOMS"),
            (Capabilities::MANAGE_GUESTS, "MANAGE_GUESTS"),
            (Capabilities::MANAGE_RESERVATIONS, "MANAGE_RESERVATIONS"),
            (Capabilities::MANAGE_INVOICES, "MANAGE_INVOICES"),
            (Capabilities::MANAGE_USERS, "MANAGE_USERS"),
        ];

        NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::empty()
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.list().join(","))
    }
}

// Serialize as a list of names for the UI
impl Serialize for Capabilities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.list())
    }
}
