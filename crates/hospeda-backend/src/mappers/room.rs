//! Room entity <-> model mapper

use hospeda_core::entities::Room;

use crate::models::{RoomModel, RoomPayload};

impl From<RoomModel> for Room {
    fn from(model: RoomModel) -> Self {
        Room {
            id: model.id_habitacion,
            number: model.numero,
            room_type: model.tipo,
            base_rate: model.precio_base,
            capacity: model.capacidad,
            status: model.estado,
            photo: model.foto.filter(|url| !url.trim().is_empty()),
        }
    }
}

impl RoomPayload {
    pub fn from_entity(room: &Room) -> Self {
        Self {
            numero: room.number,
            tipo: room.room_type,
            precio_base: room.base_rate,
            capacidad: room.capacity,
            estado: room.status,
            foto: room.photo.clone(),
        }
    }
}
