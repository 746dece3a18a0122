use actix_web::{web, HttpResponse};
use hero_core::repositories::{DatabaseProbe, HeroRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::UserResponse;
use crate::handlers::error::ApiResult;
use crate::middleware::auth::AuthContext;

/// Handler for GET /auth/me (requires a bearer token)
pub async fn me<U, H, P>(
    state: web::Data<AppState<U, H, P>>,
    auth: AuthContext,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    H: HeroRepository + 'static,
    P: DatabaseProbe + 'static,
{
    let user = state.auth_service.current_user(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
