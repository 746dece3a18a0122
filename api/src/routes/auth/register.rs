use actix_web::{web, HttpResponse};
use hero_core::repositories::{DatabaseProbe, HeroRepository, UserRepository};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{UserCreate, UserResponse};
use crate::handlers::error::ApiResult;

/// Handler for POST /auth/register
///
/// # Request Body
///
/// ```json
/// {
///     "email": "hero@example.com",
///     "username": "hero",
///     "password": "at-least-8-chars"
/// }
/// ```
///
/// # Response
///
/// 201 with the created user (without password). 400 when the e-mail or
/// username is already registered, 422 on invalid input.
pub async fn register<U, H, P>(
    state: web::Data<AppState<U, H, P>>,
    request: web::Json<UserCreate>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    H: HeroRepository + 'static,
    P: DatabaseProbe + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    tracing::debug!(username = %request.username, "Registering user");
    let user = state.auth_service.register(request.into()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}
