//! Hero CRUD handlers.
//!
//! Reads are public; writes need a bearer token and are limited to the
//! hero's owner or an admin.

use actix_web::{web, HttpResponse};
use hero_core::repositories::{DatabaseProbe, HeroRepository, UserRepository};
use validator::Validate;

use crate::app::AppState;
use crate::dto::hero::{DeleteResponse, HeroCreate, HeroListQuery, HeroResponse, HeroUpdate};
use crate::handlers::error::ApiResult;
use crate::middleware::auth::AuthContext;

/// Handler for POST /heroes
pub async fn create_hero<U, H, P>(
    state: web::Data<AppState<U, H, P>>,
    auth: AuthContext,
    request: web::Json<HeroCreate>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    H: HeroRepository + 'static,
    P: DatabaseProbe + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let hero = state
        .hero_service
        .create(&auth.actor(), request.into())
        .await?;
    Ok(HttpResponse::Created().json(HeroResponse::from(hero)))
}

/// Handler for GET /heroes?offset=&limit=
pub async fn list_heroes<U, H, P>(
    state: web::Data<AppState<U, H, P>>,
    query: web::Query<HeroListQuery>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    H: HeroRepository + 'static,
    P: DatabaseProbe + 'static,
{
    let page = state.hero_service.list(query.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(page.map(HeroResponse::from)))
}

/// Handler for GET /heroes/{hero_id}
pub async fn get_hero<U, H, P>(
    state: web::Data<AppState<U, H, P>>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    H: HeroRepository + 'static,
    P: DatabaseProbe + 'static,
{
    let hero = state.hero_service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(HeroResponse::from(hero)))
}

/// Handler for PATCH /heroes/{hero_id}
pub async fn update_hero<U, H, P>(
    state: web::Data<AppState<U, H, P>>,
    auth: AuthContext,
    path: web::Path<i32>,
    request: web::Json<HeroUpdate>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    H: HeroRepository + 'static,
    P: DatabaseProbe + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let hero = state
        .hero_service
        .update(&auth.actor(), path.into_inner(), request.into())
        .await?;
    Ok(HttpResponse::Ok().json(HeroResponse::from(hero)))
}

/// Handler for DELETE /heroes/{hero_id}
pub async fn delete_hero<U, H, P>(
    state: web::Data<AppState<U, H, P>>,
    auth: AuthContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    H: HeroRepository + 'static,
    P: DatabaseProbe + 'static,
{
    state
        .hero_service
        .delete(&auth.actor(), path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(DeleteResponse { ok: true }))
}
