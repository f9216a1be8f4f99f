//! Login page endpoint
//!
//! Authentication itself is handled elsewhere; this endpoint exists so the
//! page rendered after a successful registration can pick up (and clear) the
//! one-shot flash message.

use axum::{Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;
use utoipa::ToSchema;

use crate::rest::register::FLASH_COOKIE;
use crate::state::GatewayState;

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginPageResponse {
    /// One-shot message set by the previous request, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<String>,
}

/// Create login routes
pub fn create_login_routes() -> Router<GatewayState> {
    Router::new().route("/login", axum::routing::get(login_page))
}

#[utoipa::path(
    get,
    path = "/login",
    tag = "Auth",
    responses(
        (status = 200, description = "Login page data, with the flash message consumed", body = LoginPageResponse)
    )
)]
pub async fn login_page(jar: CookieJar) -> (CookieJar, Json<LoginPageResponse>) {
    let flash = jar.get(FLASH_COOKIE).map(|cookie| {
        urlencoding::decode(cookie.value())
            .map(|value| value.into_owned())
            .unwrap_or_else(|_| cookie.value().to_string())
    });

    let jar = if flash.is_some() {
        jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/"))
    } else {
        jar
    };

    (jar, Json(LoginPageResponse { flash }))
}
