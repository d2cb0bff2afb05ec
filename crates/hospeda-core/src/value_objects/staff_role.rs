//! Staff role carried in the backend token's `rol` claim

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::Capabilities;

/// Role of a console user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StaffRole {
    Admin,
    Receptionist,
    /// Any role string the console does not recognise
    #[default]
    Unknown,
}

impl StaffRole {
    /// Wire name used by the hotel backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Receptionist => "recepcionista",
            Self::Unknown => "desconocido",
        }
    }

    /// Parse the backend role string; unrecognised values map to `Unknown`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" | "administrador" => Self::Admin,
            "recepcionista" | "receptionist" => Self::Receptionist,
            _ => Self::Unknown,
        }
    }

    /// Capabilities granted to this role
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Self::Admin => Capabilities::ALL,
            Self::Receptionist => Capabilities::RECEPTION,
            Self::Unknown => Capabilities::VIEW_ROOMS,
        }
    }

    /// Console section a user lands on after login
    pub fn landing(&self) -> &'static str {
        match self {
            Self::Admin => "users",
            Self::Receptionist => "reservations",
            Self::Unknown => "home",
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StaffRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StaffRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(StaffRole::parse(&raw))
    }
}
