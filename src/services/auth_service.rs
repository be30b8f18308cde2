//! Admin session demo gate.
//!
//! A single fixed credential pair guards the admin panel, and the session
//! is one global flag in the store with no token and no expiry. This is
//! an illustrative gate, never a security boundary; a production rewrite
//! needs real server-side authentication.

use crate::{
    config::AppConfig,
    dto::auth::LoginRequest,
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    store::{ADMIN_AUTH_KEY, Store},
};

/// Sentinel stored under the admin key while a session is active.
const SESSION_ACTIVE: &str = "true";

pub fn login(store: &Store, config: &AppConfig, payload: LoginRequest) -> AppResult<ApiResponse<serde_json::Value>> {
    if payload.username != config.admin_username || payload.password != config.admin_password {
        return Err(AppError::BadRequest("Invalid credentials".into()));
    }

    store.set(ADMIN_AUTH_KEY, &SESSION_ACTIVE)?;

    tracing::info!("admin session opened");
    Ok(ApiResponse::success(
        "Logged in",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub fn logout(store: &Store) -> AppResult<ApiResponse<serde_json::Value>> {
    store.remove(ADMIN_AUTH_KEY)?;

    tracing::info!("admin session closed");
    Ok(ApiResponse::success(
        "Logged out",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Reads the persisted flag; absent or anything other than the sentinel
/// counts as logged out.
pub fn is_authenticated(store: &Store) -> bool {
    store.get::<String>(ADMIN_AUTH_KEY) == SESSION_ACTIVE
}
