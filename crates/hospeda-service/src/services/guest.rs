//! Guest service

use chrono::Utc;
use hospeda_core::{Capabilities, DomainError, EntityId, Guest};
use tracing::{info, instrument};

use crate::dto::{CreateGuestRequest, GuestResponse, UpdateGuestRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::session::Session;

/// Guest service
pub struct GuestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuestService<'a> {
    /// Create a new GuestService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, session))]
    pub async fn list(&self, session: &Session) -> ServiceResult<Vec<GuestResponse>> {
        session.require(Capabilities::MANAGE_GUESTS)?;
        let guests = self.ctx.guest_repo().list(session.token()).await?;
        Ok(guests.iter().map(GuestResponse::from).collect())
    }

    #[instrument(skip(self, session))]
    pub async fn get(&self, session: &Session, id: EntityId) -> ServiceResult<GuestResponse> {
        session.require(Capabilities::MANAGE_GUESTS)?;
        let guest = self.get_entity(session, id).await?;
        Ok(GuestResponse::from(&guest))
    }

    /// Register a guest; the registration date is today
    #[instrument(skip(self, session, request))]
    pub async fn create(
        &self,
        session: &Session,
        request: CreateGuestRequest,
    ) -> ServiceResult<GuestResponse> {
        session.require(Capabilities::MANAGE_GUESTS)?;

        let guest = Guest {
            id: EntityId::default(),
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            identity_document: request.identity_document.trim().to_string(),
            email: non_blank(request.email),
            phone: non_blank(request.phone),
            registered_on: Some(Utc::now().date_naive()),
        };
        guest.validate()?;

        let created = self.ctx.guest_repo().create(session.token(), &guest).await?;
        info!(guest_id = %created.id, "Guest registered");

        Ok(GuestResponse::from(&created))
    }

    #[instrument(skip(self, session, request))]
    pub async fn update(
        &self,
        session: &Session,
        id: EntityId,
        request: UpdateGuestRequest,
    ) -> ServiceResult<GuestResponse> {
        session.require(Capabilities::MANAGE_GUESTS)?;
        let mut guest = self.get_entity(session, id).await?;

        if let Some(first_name) = request.first_name {
            guest.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = request.last_name {
            guest.last_name = last_name.trim().to_string();
        }
        if let Some(document) = request.identity_document {
            guest.identity_document = document.trim().to_string();
        }
        // An empty string clears the contact field
        if request.email.is_some() {
            guest.email = non_blank(request.email);
        }
        if request.phone.is_some() {
            guest.phone = non_blank(request.phone);
        }
        guest.validate()?;

        let updated = self.ctx.guest_repo().update(session.token(), &guest).await?;
        info!(guest_id = %id, "Guest updated");

        Ok(GuestResponse::from(&updated))
    }

    #[instrument(skip(self, session))]
    pub async fn delete(&self, session: &Session, id: EntityId) -> ServiceResult<()> {
        session.require(Capabilities::MANAGE_GUESTS)?;
        self.get_entity(session, id).await?;
        self.ctx.guest_repo().delete(session.token(), id).await?;
        info!(guest_id = %id, "Guest deleted");
        Ok(())
    }

    async fn get_entity(&self, session: &Session, id: EntityId) -> ServiceResult<Guest> {
        Ok(self
            .ctx
            .guest_repo()
            .find_by_id(session.token(), id)
            .await?
            .ok_or(DomainError::GuestNotFound(id))?)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
