//! Staff user administration
//!
//! Admin-only. Passwords are forwarded to the backend and never returned.

use hospeda_core::{Capabilities, DomainError, EntityId, StaffRole, User};
use tracing::{info, instrument};

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse, UserSearchQuery};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::session::Session;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, session))]
    pub async fn list(&self, session: &Session) -> ServiceResult<Vec<UserResponse>> {
        session.require(Capabilities::MANAGE_USERS)?;
        let users = self.ctx.user_repo().list(session.token()).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    #[instrument(skip(self, session))]
    pub async fn get(&self, session: &Session, id: EntityId) -> ServiceResult<UserResponse> {
        session.require(Capabilities::MANAGE_USERS)?;
        let user = self.get_entity(session, id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Search users by the first filter given: role, name, email, then
    /// last access date
    #[instrument(skip(self, session))]
    pub async fn search(
        &self,
        session: &Session,
        query: UserSearchQuery,
    ) -> ServiceResult<Vec<UserResponse>> {
        session.require(Capabilities::MANAGE_USERS)?;
        let token = session.token();
        let repo = self.ctx.user_repo();

        let users = if let Some(role) = query.role {
            repo.find_by_role(token, role).await?
        } else if let Some(name) = query.name.as_deref().filter(|n| !n.trim().is_empty()) {
            repo.search_by_name(token, name.trim()).await?
        } else if let Some(email) = query.email.as_deref().filter(|e| !e.trim().is_empty()) {
            repo.find_by_email(token, email.trim())
                .await?
                .into_iter()
                .collect()
        } else if let Some(since) = query.active_since {
            let since = since.and_time(chrono::NaiveTime::MIN).and_utc();
            repo.find_active_since(token, since).await?
        } else {
            repo.list(token).await?
        };

        Ok(users.iter().map(UserResponse::from).collect())
    }

    #[instrument(skip(self, session, request), fields(email = %request.email))]
    pub async fn create(
        &self,
        session: &Session,
        request: CreateUserRequest,
    ) -> ServiceResult<UserResponse> {
        session.require(Capabilities::MANAGE_USERS)?;
        ensure_known_role(request.role)?;

        let user = User::new(request.username.trim().to_string(), request.email, request.role);
        user.validate()?;
        let created = self
            .ctx
            .user_repo()
            .create(session.token(), &user, &request.password)
            .await?;

        info!(user_id = %created.id, role = %created.role, "Staff user created");
        Ok(UserResponse::from(&created))
    }

    #[instrument(skip(self, session, request))]
    pub async fn update(
        &self,
        session: &Session,
        id: EntityId,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        session.require(Capabilities::MANAGE_USERS)?;
        let mut user = self.get_entity(session, id).await?;

        if let Some(username) = request.username {
            user.username = username.trim().to_string();
        }
        if let Some(email) = request.email {
            user.email = email;
        }
        if let Some(role) = request.role {
            ensure_known_role(role)?;
            user.role = role;
        }
        user.validate()?;

        let updated = self
            .ctx
            .user_repo()
            .update(session.token(), &user, request.password.as_deref())
            .await?;

        info!(user_id = %id, "Staff user updated");
        Ok(UserResponse::from(&updated))
    }

    #[instrument(skip(self, session))]
    pub async fn delete(&self, session: &Session, id: EntityId) -> ServiceResult<()> {
        session.require(Capabilities::MANAGE_USERS)?;
        self.get_entity(session, id).await?;
        self.ctx.user_repo().delete(session.token(), id).await?;
        info!(user_id = %id, "Staff user deleted");
        Ok(())
    }

    async fn get_entity(&self, session: &Session, id: EntityId) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(session.token(), id)
            .await?
            .ok_or(DomainError::UserNotFound(id))?)
    }
}

fn ensure_known_role(role: StaffRole) -> ServiceResult<()> {
    if role == StaffRole::Unknown {
        return Err(ServiceError::validation(
            "role must be admin or recepcionista",
        ));
    }
    Ok(())
}
