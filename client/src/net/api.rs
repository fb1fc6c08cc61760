//! REST API helpers for communicating with the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with display-ready messages instead of panics
//! so sign-in and channel setup failures degrade UI behavior without crashing
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ClientConfig, Credentials, VerifiedUser};

#[cfg(any(test, feature = "hydrate"))]
const VERIFY_ENDPOINT: &str = "/api/auth/verify";
#[cfg(any(test, feature = "hydrate"))]
const CONFIG_ENDPOINT: &str = "/api/config";

/// User-facing message for a failed verification response.
#[cfg(any(test, feature = "hydrate"))]
fn verify_failed_message(status: u16) -> String {
    match status {
        400 => "Enter your user number, role and password.".to_owned(),
        401 => "Invalid user number, role or password.".to_owned(),
        502 | 503 | 504 => "Sign-in service is unavailable. Try again shortly.".to_owned(),
        other => format!("sign-in failed: {other}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn config_failed_message(status: u16) -> String {
    format!("config request failed: {status}")
}

/// Verify credentials via `POST /api/auth/verify`.
///
/// # Errors
///
/// Returns a display-ready message when the credentials are rejected or the
/// verification service cannot be reached.
pub async fn verify_credentials(credentials: &Credentials) -> Result<VerifiedUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(VERIFY_ENDPOINT)
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(verify_failed_message(resp.status()));
        }
        resp.json::<VerifiedUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Fetch runtime settings from `GET /api/config`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is malformed.
pub async fn fetch_client_config() -> Result<ClientConfig, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(config_failed_message(resp.status()));
        }
        resp.json::<ClientConfig>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
