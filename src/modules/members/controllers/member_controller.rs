use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::members::models::MemberRequest;
use crate::modules::members::services::MemberService;

/// List all members with their clubs
/// GET /members
pub async fn list_members(
    service: web::Data<Arc<MemberService>>,
) -> Result<HttpResponse, AppError> {
    let members = service.list_all().await?;
    Ok(HttpResponse::Ok().json(members))
}

/// Get member by ID
/// GET /members/{member_id}
pub async fn get_member(
    service: web::Data<Arc<MemberService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let member = service.get_by_id(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(member))
}

/// Create a new member
/// POST /members
pub async fn create_member(
    service: web::Data<Arc<MemberService>>,
    request: web::Json<MemberRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let member = service.create(request.into_member()).await?;
    Ok(HttpResponse::Created().json(member))
}

/// Update a member
/// PUT /members/{member_id}
pub async fn update_member(
    service: web::Data<Arc<MemberService>>,
    path: web::Path<String>,
    request: web::Json<MemberRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let member = service
        .update(&path.into_inner(), request.into_update())
        .await?;
    Ok(HttpResponse::Ok().json(member))
}

/// Delete a member
/// DELETE /members/{member_id}
pub async fn delete_member(
    service: web::Data<Arc<MemberService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configure member routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/members")
            .route(web::get().to(list_members))
            .route(web::post().to(create_member)),
    )
    .service(
        web::resource("/members/{member_id}")
            .route(web::get().to(get_member))
            .route(web::put().to(update_member))
            .route(web::delete().to(delete_member)),
    );
}
