use actix_web::{web, HttpResponse};
use hero_core::repositories::{DatabaseProbe, HeroRepository, UserRepository};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{LoginData, TokenResponse};
use crate::handlers::error::ApiResult;

/// Handler for POST /auth/login
///
/// Returns `{"access_token": "...", "token_type": "bearer"}`; 401 when the
/// e-mail is unknown or the password is wrong.
pub async fn login<U, H, P>(
    state: web::Data<AppState<U, H, P>>,
    request: web::Json<LoginData>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    H: HeroRepository + 'static,
    P: DatabaseProbe + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    tracing::debug!("Login attempt");
    let token = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(TokenResponse::from(token)))
}
