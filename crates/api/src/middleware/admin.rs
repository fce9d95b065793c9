//! Shared-secret gate for the admin surface.
//!
//! A single password from `ADMIN_PASSWORD`, compared by equality. There are
//! no users, sessions or tokens: the client sends the password with every
//! admin request in the `x-admin-password` header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use portfolio_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the admin password.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Message returned when the password does not match.
pub const INCORRECT_PASSWORD: &str = "Incorrect password";

/// Proof that the request carried the admin password.
///
/// ```ignore
/// async fn admin_only(_admin: AdminAccess) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

/// Compare a candidate against the configured password.
///
/// Rejects with a configuration error when no password is configured so
/// the admin surface stays closed by default.
pub fn check_password(configured: Option<&str>, candidate: &str) -> Result<(), CoreError> {
    let expected = configured.ok_or_else(|| {
        CoreError::Configuration("Admin access is not configured".into())
    })?;
    if candidate == expected {
        Ok(())
    } else {
        Err(CoreError::Unauthorized(INCORRECT_PASSWORD.into()))
    }
}

impl FromRequestParts<AppState> for AdminAccess {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let candidate = parts
            .headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(format!(
                    "Missing {ADMIN_PASSWORD_HEADER} header"
                )))
            })?;

        check_password(state.config.admin_password.as_deref(), candidate).map_err(|err| {
            tracing::warn!(error = %err, "Rejected admin request");
            AppError::Core(err)
        })?;

        Ok(AdminAccess)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn matching_password_passes() {
        assert!(check_password(Some("s3cret"), "s3cret").is_ok());
    }

    #[test]
    fn wrong_password_is_unauthorized() {
        assert_matches!(
            check_password(Some("s3cret"), "guess"),
            Err(CoreError::Unauthorized(msg)) if msg == INCORRECT_PASSWORD
        );
    }

    #[test]
    fn empty_candidate_is_unauthorized() {
        assert_matches!(
            check_password(Some("s3cret"), ""),
            Err(CoreError::Unauthorized(_))
        );
    }

    #[test]
    fn unset_password_closes_the_gate() {
        assert_matches!(
            check_password(None, "anything"),
            Err(CoreError::Configuration(_))
        );
    }
}
