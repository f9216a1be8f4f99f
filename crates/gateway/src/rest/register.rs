//! Registration endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use minitwit_users::{FieldErrors, RegisterOutcome, RegisterRequest};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::GatewayResult;
use crate::state::GatewayState;

/// Cookie carrying the one-shot flash message to the next rendered page
pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Field name to human-readable message
    #[schema(value_type = Object)]
    pub errors: FieldErrors,
}

/// Create registration routes
pub fn create_register_routes() -> Router<GatewayState> {
    Router::new().route("/register", axum::routing::post(register))
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "Auth",
    responses(
        (status = 303, description = "Registration succeeded, navigate to the login page"),
        (status = 422, description = "Submission rejected with field-level errors", body = ValidationErrorResponse),
        (status = 500, description = "The store rejected the write")
    )
)]
pub async fn register(
    State(state): State<GatewayState>,
    jar: CookieJar,
    Form(form): Form<RegisterRequest>,
) -> GatewayResult<Response> {
    let outcome = state.registration_service().register(form).await?;

    let response = match outcome {
        RegisterOutcome::Redisplay(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorResponse { errors }),
        )
            .into_response(),
        RegisterOutcome::Redirect { target, flash } => {
            let cookie = Cookie::build((FLASH_COOKIE, urlencoding::encode(&flash).into_owned()))
                .path("/")
                .http_only(true);
            (jar.add(cookie), Redirect::to(&target)).into_response()
        }
    };

    Ok(response)
}
