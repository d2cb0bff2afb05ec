//! Guest entity <-> model mapper

use hospeda_core::entities::Guest;

use crate::models::{GuestModel, GuestPayload};

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<GuestModel> for Guest {
    fn from(model: GuestModel) -> Self {
        Guest {
            id: model.id_huesped,
            first_name: model.nombre,
            last_name: model.apellidos,
            identity_document: model.documento_identidad,
            email: non_blank(model.email),
            phone: non_blank(model.telefono),
            registered_on: model.fecha_registro,
        }
    }
}

impl GuestPayload {
    pub fn from_entity(guest: &Guest) -> Self {
        Self {
            nombre: guest.first_name.clone(),
            apellidos: guest.last_name.clone(),
            documento_identidad: guest.identity_document.clone(),
            email: guest.email.clone(),
            telefono: guest.phone.clone(),
            fecha_registro: guest.registered_on,
        }
    }
}
