//! Authentication service
//!
//! Exchanges staff credentials for a backend token and turns bearer tokens
//! into request-scoped [`Session`]s.

use hospeda_core::AccessToken;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, LoginResponse, SessionUserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::session::Session;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password
    ///
    /// The backend checks the credentials and issues the token; the claims
    /// are decoded here to report the identity and landing section.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let token = self
            .ctx
            .auth_gateway()
            .login(&request.email, &request.password)
            .await
            .inspect_err(|e| warn!(error = %e, "Login rejected"))?;

        let session = self.authenticate(token.as_str())?;

        info!(
            user_id = ?session.user_id(),
            role = %session.role(),
            "Staff member logged in"
        );

        Ok(LoginResponse {
            access_token: token.as_str().to_string(),
            token_type: "Bearer".to_string(),
            expires_at: session.expires_at(),
            user: SessionUserResponse::from(&session),
            landing: session.role().landing().to_string(),
        })
    }

    /// Decode a bearer token into a session; expired tokens are rejected
    pub fn authenticate(&self, token: &str) -> ServiceResult<Session> {
        let claims = self.ctx.jwt_service().decode_token(token)?;
        Ok(Session::from_claims(AccessToken::new(token), &claims))
    }
}
