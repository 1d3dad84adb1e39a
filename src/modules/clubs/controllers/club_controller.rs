use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::clubs::models::ClubRequest;
use crate::modules::clubs::services::ClubService;

/// List all clubs with their members
/// GET /clubs
pub async fn list_clubs(service: web::Data<Arc<ClubService>>) -> Result<HttpResponse, AppError> {
    let clubs = service.list_all().await?;
    Ok(HttpResponse::Ok().json(clubs))
}

/// Get club by ID
/// GET /clubs/{club_id}
pub async fn get_club(
    service: web::Data<Arc<ClubService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let club = service.get_by_id(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(club))
}

/// Create a new club
/// POST /clubs
pub async fn create_club(
    service: web::Data<Arc<ClubService>>,
    request: web::Json<ClubRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let club = service.create(request.into_club()).await?;
    Ok(HttpResponse::Created().json(club))
}

/// Update a club
/// PUT /clubs/{club_id}
pub async fn update_club(
    service: web::Data<Arc<ClubService>>,
    path: web::Path<String>,
    request: web::Json<ClubRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let club = service
        .update(&path.into_inner(), request.into_update())
        .await?;
    Ok(HttpResponse::Ok().json(club))
}

/// Delete a club
/// DELETE /clubs/{club_id}
pub async fn delete_club(
    service: web::Data<Arc<ClubService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configure club routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/clubs")
            .route(web::get().to(list_clubs))
            .route(web::post().to(create_club)),
    )
    .service(
        web::resource("/clubs/{club_id}")
            .route(web::get().to(get_club))
            .route(web::put().to(update_club))
            .route(web::delete().to(delete_club)),
    );
}
