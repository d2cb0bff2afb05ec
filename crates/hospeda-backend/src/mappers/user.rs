//! User entity <-> model mapper

use hospeda_core::entities::User;

use crate::models::{UserModel, UserPayload};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id_usuario,
            username: model.nombre_usuario,
            email: model.email,
            role: model.rol,
            last_access: model.ultimo_acceso,
        }
    }
}

impl UserPayload {
    pub fn from_entity(user: &User, password: Option<&str>) -> Self {
        Self {
            nombre_usuario: user.username.clone(),
            email: user.email.clone(),
            rol: user.role,
            password: password.map(str::to_string),
        }
    }
}
