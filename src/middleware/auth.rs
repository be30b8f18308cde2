use axum::extract::FromRequestParts;

use crate::{error::AppError, services::auth_service, state::AppState};

/// Extractor gating the admin routes on the persisted session flag.
///
/// The flag is global process state with no token and no expiry,
/// mirroring the single-session model this panel was built around. Demo
/// gate only; see DESIGN.md.
#[derive(Debug, Clone, Copy)]
pub struct AdminGate;

impl FromRequestParts<AppState> for AdminGate {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if auth_service::is_authenticated(&state.store) {
            Ok(AdminGate)
        } else {
            Err(AppError::Forbidden)
        }
    }
}
