//! Reservation entity <-> model mapper

use hospeda_core::entities::{Reservation, ReservationLine};
use hospeda_core::error::DomainError;
use hospeda_core::value_objects::DateRange;
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{
    ReservationLineModel, ReservationLinePayload, ReservationModel, ReservationPayload,
};

/// Convert a backend line; lines without a room are dropped
pub fn line_from_model(model: ReservationLineModel) -> Option<ReservationLine> {
    let Some(room_id) = model.id_habitacion.filter(|id| !id.is_unassigned()) else {
        warn!(line = ?model.id_detalle, "Reservation line without room dropped");
        return None;
    };

    let room_label = model
        .habitacion
        .map(|room| room.numero)
        .filter(|numero| *numero > 0)
        .map_or_else(|| room_id.to_string(), |numero| numero.to_string());

    Some(ReservationLine {
        id: model.id_detalle,
        room_id,
        room_label,
        nights: model.noches,
        applied_rate: model.precio_aplicado,
    })
}

impl TryFrom<ReservationModel> for Reservation {
    type Error = DomainError;

    fn try_from(model: ReservationModel) -> Result<Self, Self::Error> {
        let (Some(check_in), Some(check_out)) = (model.fecha_entrada, model.fecha_salida) else {
            return Err(DomainError::ValidationError(format!(
                "reservation {} has no stay dates",
                model.id_reserva
            )));
        };
        let range = DateRange::new(check_in, check_out);

        let mut lines: Vec<ReservationLine> = model
            .detalles_reserva
            .into_iter()
            .filter_map(line_from_model)
            .collect();

        // Single-room reservations carry the room on the reservation itself
        if lines.is_empty() {
            if let Some(room_id) = model.id_habitacion.filter(|id| !id.is_unassigned()) {
                lines.push(ReservationLine {
                    id: None,
                    room_id,
                    room_label: room_id.to_string(),
                    nights: range.nights().unwrap_or(0),
                    applied_rate: Decimal::ZERO,
                });
            }
        }

        Ok(Reservation {
            id: model.id_reserva,
            guest_id: model.id_huesped,
            guest: model.huesped.map(Into::into),
            range,
            lines,
        })
    }
}

impl ReservationPayload {
    pub fn from_entity(reservation: &Reservation) -> Self {
        let detalles_reserva: Vec<ReservationLinePayload> = reservation
            .lines
            .iter()
            .map(|line| ReservationLinePayload {
                id_habitacion: line.room_id,
                noches: line.nights,
                precio_aplicado: line.applied_rate,
            })
            .collect();

        Self {
            fecha_inicio: reservation.range.check_in,
            fecha_fin: reservation.range.check_out,
            id_huesped: reservation.guest_id,
            id_habitacion: reservation.lines.first().map(|line| line.room_id).unwrap_or_default(),
            detalles_reserva,
        }
    }
}
