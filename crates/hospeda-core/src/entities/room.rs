//! Room entity - a bookable hotel room

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::EntityId;

/// Room category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    #[default]
    Individual,
    Doble,
    Triple,
    Dormitorio,
}

impl RoomType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Doble => "doble",
            Self::Triple => "triple",
            Self::Dormitorio => "dormitorio",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Housekeeping / occupancy status reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoomStatus {
    #[default]
    #[serde(rename = "libre", alias = "free")]
    Free,
    #[serde(rename = "ocupada", alias = "occupied")]
    Occupied,
    #[serde(rename = "mantenimiento", alias = "maintenance")]
    Maintenance,
    #[serde(rename = "reservada", alias = "reserved")]
    Reserved,
    #[serde(rename = "limpieza", alias = "cleaning")]
    Cleaning,
}

impl RoomStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "libre",
            Self::Occupied => "ocupada",
            Self::Maintenance => "mantenimiento",
            Self::Reserved => "reservada",
            Self::Cleaning => "limpieza",
        }
    }

    /// Rooms out of service cannot be offered regardless of bookings
    #[inline]
    pub fn is_out_of_service(self) -> bool {
        matches!(self, Self::Maintenance)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Room entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: EntityId,
    pub number: u32,
    pub room_type: RoomType,
    pub base_rate: Decimal,
    pub capacity: u8,
    pub status: RoomStatus,
    pub photo: Option<String>,
}

impl Room {
    pub const MIN_CAPACITY: u8 = 1;
    pub const MAX_CAPACITY: u8 = 4;

    /// Smallest accepted nightly rate (one cent)
    pub fn min_rate() -> Decimal {
        Decimal::new(1, 2)
    }

    /// Largest accepted nightly rate
    pub fn max_rate() -> Decimal {
        Decimal::from(1_000_000)
    }

    /// Whether `rate` is an acceptable nightly rate
    pub fn accepts_rate(rate: Decimal) -> bool {
        (Self::min_rate()..=Self::max_rate()).contains(&rate)
    }

    /// Create a free room with the given attributes
    pub fn new(
        id: EntityId,
        number: u32,
        room_type: RoomType,
        base_rate: Decimal,
        capacity: u8,
    ) -> Self {
        Self {
            id,
            number,
            room_type,
            base_rate,
            capacity,
            status: RoomStatus::Free,
            photo: None,
        }
    }

    /// Check the room attributes the console is responsible for
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.number == 0 {
            return Err(DomainError::ValidationError(
                "room number must be at least 1".to_string(),
            ));
        }
        if !Self::accepts_rate(self.base_rate) {
            return Err(DomainError::InvalidRate(self.base_rate));
        }
        if !(Self::MIN_CAPACITY..=Self::MAX_CAPACITY).contains(&self.capacity) {
            return Err(DomainError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}
